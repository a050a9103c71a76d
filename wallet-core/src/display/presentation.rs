use serde::{Deserialize, Serialize};

use super::{
    amount::MoneyAmount,
    currency::BaseCurrency,
    formatter::{format_value, FormatMode},
    interface::CurrencyNames,
};

/// Shown in place of the value when no amount could be resolved.
pub const UNAVAILABLE_PLACEHOLDER: &str = "-";

/// Font size the Big layout is designed around.
pub const DEFAULT_BIG_SIZE: u32 = 48;

pub const BIG_SIGN_RATIO: ScaleRatio = ScaleRatio::new(34, 48);
pub const BIG_SYMBOL_RATIO: ScaleRatio = ScaleRatio::new(24, 48);
pub const BIG_CODE_RATIO: ScaleRatio = ScaleRatio::new(16, 48);
pub const BIG_LINE_HEIGHT_RATIO: ScaleRatio = ScaleRatio::new(64, 48);

pub const BIG_SYMBOL_PADDING_VERTICAL: u32 = 4;

/// Size of a Big layout part relative to the value's font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl ScaleRatio {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `size * ratio`, rounded half up.
    pub fn round(&self, size: u32) -> u32 {
        let scaled = u64::from(size) * u64::from(self.numerator) * 2 + u64::from(self.denominator);
        let ret = scaled / (2 * u64::from(self.denominator));
        u32::try_from(ret).unwrap_or(u32::MAX)
    }

    /// `size * ratio`, rounded down.
    pub fn floor(&self, size: u32) -> u32 {
        let ret = u64::from(size) * u64::from(self.numerator) / u64::from(self.denominator);
        u32::try_from(ret).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayType {
    #[default]
    Default,

    /// Symbol and code drawn smaller than the value, beside it.
    Big,
}

/// Which parts of an amount are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    pub hide_sign: bool,
    pub hide_symbol: bool,
    pub hide_code: bool,
    pub hide_full_currency_name: bool,

    /// Prefix `+` on non-negative amounts.
    pub show_explicit_positive_sign: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            hide_sign: false,
            hide_symbol: false,
            hide_code: true,
            hide_full_currency_name: true,
            show_explicit_positive_sign: false,
        }
    }
}

/// Colour the host should paint the amount with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorHint {
    /// Whatever colour the surrounding style sets.
    #[default]
    Inherit,
    GoldBrand,
    GreenBrand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Sign(String),
    Symbol(String),
    Value(String),
    Code(String),
    FullCurrencyName(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Self::Sign(s) => s,
            Self::Symbol(s) => s,
            Self::Value(s) => s,
            Self::Code(s) => s,
            Self::FullCurrencyName(s) => s,
        }
    }
}

/// A single line of text, in segment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineDisplay {
    pub segments: Vec<Segment>,
    pub color: ColorHint,
}

impl InlineDisplay {
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Code(s) | Segment::FullCurrencyName(s) => format!(" {}", s),
                other => other.text().to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: u32,
    pub line_height: Option<u32>,
    pub padding_vertical: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

/// Value at full size with sign, symbol and code as separately sized parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigDisplay {
    pub sign: Option<StyledText>,
    pub symbol: Option<StyledText>,
    pub value: StyledText,
    pub code: Option<StyledText>,
    pub color: ColorHint,
}

impl BigDisplay {
    pub fn text(&self) -> String {
        let mut ret = String::new();
        for part in [&self.sign, &self.symbol].into_iter().flatten() {
            ret.push_str(&part.text);
        }
        ret.push_str(&self.value.text);
        if let Some(code) = &self.code {
            ret.push(' ');
            ret.push_str(&code.text);
        }
        ret
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyDisplay {
    Inline(InlineDisplay),
    Big(BigDisplay),
}

impl CurrencyDisplay {
    /// Plain text rendering, mostly useful for logs and accessibility labels.
    pub fn text(&self) -> String {
        match self {
            Self::Inline(inline) => inline.text(),
            Self::Big(big) => big.text(),
        }
    }
}

/// Everything the assembler needs besides the amount and flags.
pub struct AssembleContext<'a> {
    /// Display currency of the amount before resolution. The full name follows
    /// it, so a converted Dollar amount still reads "Celo Dollars".
    pub display_currency: BaseCurrency,

    /// Value font size for the Big layout.
    pub size: u32,

    pub color: ColorHint,

    pub names: &'a dyn CurrencyNames,
}

pub fn sign(resolved: &MoneyAmount, show_explicit_positive_sign: bool) -> &'static str {
    if resolved.value.is_sign_negative() && !resolved.value.is_zero() {
        "-"
    } else if show_explicit_positive_sign {
        "+"
    } else {
        ""
    }
}

/// Arrange a resolved amount into displayable parts.
///
/// `None` means resolution failed: only the placeholder value is produced.
pub fn assemble(
    resolved: Option<&MoneyAmount>,
    mode: FormatMode,
    display_type: DisplayType,
    flags: &DisplayFlags,
    context: &AssembleContext<'_>,
) -> CurrencyDisplay {
    let parts = match resolved {
        Some(amount) => Parts {
            sign: sign(amount, flags.show_explicit_positive_sign),
            symbol: amount.currency_code.symbol(),
            value: format_value(amount.value, mode, amount.currency_code.display_currency()),
            code: Some(amount.code()),
            full_name: context.names.full_name(context.display_currency),
        },
        None => Parts {
            sign: "",
            symbol: None,
            value: UNAVAILABLE_PLACEHOLDER.to_string(),
            code: None,
            full_name: None,
        },
    };

    match display_type {
        DisplayType::Default => CurrencyDisplay::Inline(parts.inline(flags, context.color)),
        DisplayType::Big => CurrencyDisplay::Big(parts.big(flags, context.size, context.color)),
    }
}

struct Parts {
    sign: &'static str,
    symbol: Option<&'static str>,
    value: String,
    code: Option<&'static str>,
    full_name: Option<String>,
}

impl Parts {
    fn inline(self, flags: &DisplayFlags, color: ColorHint) -> InlineDisplay {
        let mut segments = Vec::with_capacity(5);

        if !flags.hide_sign && !self.sign.is_empty() {
            segments.push(Segment::Sign(self.sign.to_string()));
        }
        if let Some(symbol) = self.symbol.filter(|_| !flags.hide_symbol) {
            segments.push(Segment::Symbol(symbol.to_string()));
        }
        segments.push(Segment::Value(self.value));
        if let Some(code) = self.code.filter(|_| !flags.hide_code) {
            segments.push(Segment::Code(code.to_string()));
        }
        if let Some(name) = self.full_name.filter(|_| !flags.hide_full_currency_name) {
            segments.push(Segment::FullCurrencyName(name));
        }

        InlineDisplay { segments, color }
    }

    fn big(self, flags: &DisplayFlags, size: u32, color: ColorHint) -> BigDisplay {
        let line_height = BIG_LINE_HEIGHT_RATIO.round(size);

        let sign = (!flags.hide_sign && !self.sign.is_empty()).then(|| StyledText {
            text: self.sign.to_string(),
            style: TextStyle {
                font_size: BIG_SIGN_RATIO.round(size),
                ..Default::default()
            },
        });

        let symbol = self
            .symbol
            .filter(|_| !flags.hide_symbol)
            .map(|symbol| StyledText {
                text: symbol.to_string(),
                style: TextStyle {
                    font_size: BIG_SYMBOL_RATIO.floor(size),
                    line_height: None,
                    padding_vertical: Some(BIG_SYMBOL_PADDING_VERTICAL),
                },
            });

        let value = StyledText {
            text: self.value,
            style: TextStyle {
                font_size: size,
                line_height: Some(line_height),
                padding_vertical: None,
            },
        };

        let code = self.code.filter(|_| !flags.hide_code).map(|code| StyledText {
            text: code.to_string(),
            style: TextStyle {
                font_size: BIG_CODE_RATIO.round(size),
                line_height: Some(line_height),
                padding_vertical: None,
            },
        });

        BigDisplay {
            sign,
            symbol,
            value,
            code,
            color,
        }
    }
}
