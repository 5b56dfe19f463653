use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payment,
    Withdrawal,
    Deposit,
    Refund,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Withdrawal => "withdrawal",
            Self::Deposit => "deposit",
            Self::Refund => "refund",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "payment" => Some(Self::Payment),
            "withdrawal" => Some(Self::Withdrawal),
            "deposit" => Some(Self::Deposit),
            "refund" => Some(Self::Refund),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    /// Signed amount, negative for debits.
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub description: String,
    pub status: String,
    pub order_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BalanceDto {
    pub balance: Decimal,
    pub transactions: Vec<TransactionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateWithdrawalDto {
    pub amount: Decimal,
    pub requisites: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateDepositDto {
    pub amount: Decimal,
    #[serde(default)]
    pub payment_method: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Which kind of account a ledger operation targets.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    User,
    Driver,
}

/// Withdrawal or deposit request as seen by its owner and by admins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FundsRequestDto {
    pub id: i32,
    pub account_kind: AccountKind,
    pub account_id: i32,
    pub amount: Decimal,
    /// Payout requisites for withdrawals, payment method for deposits.
    pub details: String,
    pub status: RequestStatus,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct ReviewRequestDto {
    pub admin_note: Option<String>,
}

/// Admin top-up of an account without a deposit request.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DirectCreditDto {
    pub account_kind: AccountKind,
    pub account_id: i32,
    pub amount: Decimal,
    pub note: Option<String>,
}
