use strum_macros::{AsRefStr, Display};

#[derive(AsRefStr, Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "qualification")]
    Qualification,
    #[strum(serialize = "yearOfPassing")]
    YearOfPassing,
    #[strum(serialize = "working")]
    Working,
    #[strum(serialize = "course")]
    Course,
    #[strum(serialize = "mobile")]
    Mobile,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "transactionId")]
    TransactionId,
    #[strum(serialize = "paymentScreenshot")]
    PaymentScreenshot,
}
