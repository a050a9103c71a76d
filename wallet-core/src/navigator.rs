use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::error::{AsClientError, ClientError};

const ERROR_PREFIX: &str = "[NAVIGATOR]";

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("{ERROR_PREFIX} navigator client error: {0}")]
    ClientError(#[from] ClientError),
}

/// Navigable screens of the wallet app. `Display` and `FromStr` use the route
/// name the router registers the screen under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum Screen {
    AccountKeyEducation,
    AppLoading,
    BackupComplete,
    BackupForceScreen,
    BackupIntroduction,
    BackupPhrase,
    BackupQuiz,
    BidaliScreen,
    ConsumerIncentivesHomeScreen,
    DappKitAccountAuth,
    DappKitSignTxScreen,
    DappKitTxDataScreen,
    Debug,
    DrawerNavigator,
    ErrorScreen,
    EscrowedPaymentListScreen,
    ExchangeHomeScreen,
    ExchangeReview,
    ExchangeTradeScreen,
    ExternalExchanges,
    FiatExchange,
    FiatExchangeOptions,
    GoldEducation,
    #[strum(serialize = "ImportContactsScreen")]
    #[serde(rename = "ImportContactsScreen")]
    ImportContacts,
    ImportWallet,
    IncomingPaymentRequestListScreen,
    Language,
    LanguageModal,
    Licenses,
    LocalProviderCashOut,
    Main,
    MoonPay,
    NameAndPicture,
    OnboardingEducationScreen,
    OnboardingSuccessScreen,
    OutgoingPaymentRequestListScreen,
    PaymentRequestConfirmation,
    PaymentRequestUnavailable,
    PhoneNumberLookupQuota,
    PhotosEducation,
    PhotosNUX,
    PincodeEnter,
    PincodeSet,
    Profile,
    ProviderOptionsScreen,
    QRCode,
    QRNavigator,
    QRScanner,
    Ramp,
    ReclaimPaymentConfirmationScreen,
    RegulatoryTerms,
    SelectCountry,
    SelectLocalCurrency,
    Send,
    SendAmount,
    SendConfirmation,
    SendConfirmationModal,
    SetClock,
    Settings,
    Simplex,
    Spend,
    Support,
    SupportContact,
    Sync,
    TransactionReview,
    UpgradeScreen,
    ValidateRecipientAccount,
    ValidateRecipientIntro,
    VerificationEducationScreen,
    VerificationInputScreen,
    VerificationLoadingScreen,
    WalletHome,
    WebViewScreen,
    Welcome,
    WithdrawCeloQrScannerScreen,
    WithdrawCeloReviewScreen,
    WithdrawCeloScreen,
}

impl Screen {
    pub fn route(&self) -> &str {
        self.as_ref()
    }

    pub fn from_route(route: &str) -> Result<Self, NavigatorError> {
        let screen = Screen::from_str(route)
            .with_context(|| format!("unknown screen route {:?}", route))
            .as_client_err()?;

        Ok(screen)
    }
}
