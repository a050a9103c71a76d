use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::{debug, error};
use wallet_core::display::{
    render, CurrencyDisplay, DefaultCurrencyNames, DisplayFlags, DisplayProps, DisplayType,
    ExchangeRate, FormatMode, LocalCurrencyCode, MoneyAmount, RateSnapshot,
};
use wallet_core::navigator::Screen;
use wallet_utils::{config_util, tracing_util};

const ENV_PREFIX: &str = "TOOL_";
const ERROR_PREFIX: &str = "[TOOL]";
const USAGE: &str = "usage: wallet-tool \"<CODE> <AMOUNT>\" [FORMAT_MODE] | wallet-tool screens";

/// Render settings read from TOOL_* env variables.
#[derive(Debug, Clone, Deserialize)]
struct Config {
    #[serde(alias = "TOOL_LOCAL_CURRENCY", default = "default_local_currency")]
    local_currency: String,

    #[serde(alias = "TOOL_GOLD_TO_DOLLAR_RATE", default)]
    gold_to_dollar_rate: Option<String>,

    #[serde(alias = "TOOL_DOLLAR_TO_LOCAL_RATE", default)]
    dollar_to_local_rate: Option<String>,

    /// Unset applies the default policy: local for everything but Gold.
    #[serde(alias = "TOOL_SHOW_LOCAL_AMOUNT", default)]
    show_local_amount: Option<bool>,

    #[serde(alias = "TOOL_BIG", default)]
    big: bool,

    #[serde(alias = "TOOL_SIZE", default)]
    size: Option<String>,

    #[serde(alias = "TOOL_SHOW_CODE", default)]
    show_code: bool,

    #[serde(alias = "TOOL_SHOW_FULL_NAME", default)]
    show_full_name: bool,

    #[serde(alias = "TOOL_EXPLICIT_POSITIVE_SIGN", default)]
    explicit_positive_sign: bool,
}

fn default_local_currency() -> String {
    LocalCurrencyCode::default().code().to_string()
}

impl Config {
    fn rates(&self) -> anyhow::Result<RateSnapshot> {
        let local_currency = LocalCurrencyCode::from_str(&self.local_currency)?;
        let gold_to_dollar = parse_rate(self.gold_to_dollar_rate.as_deref())?;
        let dollar_to_local = parse_rate(self.dollar_to_local_rate.as_deref())?;

        Ok(RateSnapshot::new(gold_to_dollar, dollar_to_local, local_currency))
    }

    fn props(&self, format_mode: FormatMode) -> anyhow::Result<DisplayProps> {
        let mut props = DisplayProps {
            show_local_amount: self.show_local_amount,
            format_mode,
            flags: DisplayFlags {
                hide_code: !self.show_code,
                hide_full_currency_name: !self.show_full_name,
                show_explicit_positive_sign: self.explicit_positive_sign,
                ..Default::default()
            },
            ..Default::default()
        };

        if self.big {
            props.display_type = DisplayType::Big;
        }

        if let Some(size) = self.size.as_deref() {
            props.size = size
                .trim()
                .parse()
                .with_context(|| format!("{} invalid TOOL_SIZE {:?}", ERROR_PREFIX, size))?;
        }

        Ok(props)
    }
}

fn parse_rate(rate: Option<&str>) -> anyhow::Result<Option<ExchangeRate>> {
    match rate.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => Ok(Some(ExchangeRate::from_str(r)?)),
        None => Ok(None),
    }
}

fn print_display(display: &CurrencyDisplay) {
    println!("{}", display.text());

    if let CurrencyDisplay::Big(big) = display {
        for (part, text) in [
            ("sign", big.sign.as_ref()),
            ("symbol", big.symbol.as_ref()),
            ("value", Some(&big.value)),
            ("code", big.code.as_ref()),
        ] {
            if let Some(text) = text {
                println!("  {:<6} {:?} {:?}", part, text.text, text.style);
            }
        }
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let first = args.first().ok_or_else(|| anyhow!(USAGE))?;

    if first == "screens" {
        for screen in <Screen as strum::IntoEnumIterator>::iter() {
            println!("{}", screen);
        }
        return Ok(());
    }

    let amount = MoneyAmount::from_str(first)?;
    let format_mode = match args.get(1) {
        Some(mode) => FormatMode::parse(mode)?,
        None => FormatMode::Default,
    };

    let cfg: Config = config_util::get_config(ENV_PREFIX)?;
    debug!(?cfg, "loaded config");

    let display = render(
        &amount,
        &cfg.props(format_mode)?,
        &cfg.rates()?,
        &DefaultCurrencyNames,
    );
    print_display(&display);

    Ok(())
}

fn main() -> ExitCode {
    tracing_util::init_tracing("wallet-tool");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{} {:#}", ERROR_PREFIX, err);
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
