use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    amount::MoneyAmount,
    formatter::FormatMode,
    interface::CurrencyNames,
    presentation::{
        assemble, AssembleContext, ColorHint, CurrencyDisplay, DisplayFlags, DisplayType,
        DEFAULT_BIG_SIZE,
    },
    rate::{CurrencyInfo, RateSnapshot},
    resolver::{resolve, should_show_local_amount},
};

/// Component level options for showing one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProps {
    pub display_type: DisplayType,

    /// Only used by the Big layout.
    pub size: u32,

    /// Paint with the brand colour of the amount's currency.
    pub use_colors: bool,

    /// `None` applies the default policy, see [`should_show_local_amount`].
    pub show_local_amount: Option<bool>,

    pub format_mode: FormatMode,
    pub flags: DisplayFlags,
    pub currency_info: Option<CurrencyInfo>,
}

impl Default for DisplayProps {
    fn default() -> Self {
        Self {
            display_type: DisplayType::Default,
            size: DEFAULT_BIG_SIZE,
            use_colors: false,
            show_local_amount: None,
            format_mode: FormatMode::Default,
            flags: DisplayFlags::default(),
            currency_info: None,
        }
    }
}

/// Decide currency, digits and layout for an amount.
#[instrument(level = "trace", skip(names))]
pub fn render(
    amount: &MoneyAmount,
    props: &DisplayProps,
    rates: &RateSnapshot,
    names: &dyn CurrencyNames,
) -> CurrencyDisplay {
    let rates = match &props.currency_info {
        Some(info) => rates.with_currency_info(info),
        None => *rates,
    };

    let show_local = should_show_local_amount(amount, props.show_local_amount);
    let resolved = resolve(amount, show_local, &rates);

    let context = AssembleContext {
        display_currency: amount.currency_code.display_currency(),
        size: props.size,
        color: color_hint(amount, props.use_colors),
        names,
    };

    assemble(
        resolved.as_ref(),
        props.format_mode,
        props.display_type,
        &props.flags,
        &context,
    )
}

/// Brand colour follows the input currency, not the displayed one.
pub fn color_hint(amount: &MoneyAmount, use_colors: bool) -> ColorHint {
    if !use_colors {
        return ColorHint::Inherit;
    }

    if amount.currency_code.is_gold() {
        ColorHint::GoldBrand
    } else {
        ColorHint::GreenBrand
    }
}
