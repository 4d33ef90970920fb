//! BankAccount aggregate - an account whose balance can never go negative

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::common::args;
use crate::error::DomainError;
use crate::guarded::{guarded, GuardedEntity};
use crate::value_objects::{NonNegativeAmount, PositiveAmount};

/// A bank account.
///
/// # Invariants
///
/// - `balance` is never negative, before or after any operation
///
/// # Example
///
/// ```
/// use guardrail_domain::aggregates::BankAccount;
///
/// let mut account = BankAccount::with_balance("1122334455", "Alexey Smirnov", 1000.0).unwrap();
/// account.withdraw(200.0).unwrap();
///
/// assert_eq!(account.balance(), 800.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    account_number: String,
    owner: String,
    balance: f64,
}

impl BankAccount {
    /// Open an account with a zero balance.
    ///
    /// Never fails in practice; see [`BankAccount::with_balance`].
    pub fn new(
        account_number: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::with_balance(account_number, owner, 0.0)
    }

    /// Open an account with an opening balance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `balance` is negative.
    pub fn with_balance(
        account_number: impl Into<String>,
        owner: impl Into<String>,
        balance: f64,
    ) -> Result<Self, DomainError> {
        let (account_number, owner) = (account_number.into(), owner.into());
        guarded(Self::ENTITY, "new", || {
            Self::build(account_number, owner, balance)
        })
    }

    fn build(account_number: String, owner: String, balance: f64) -> Result<Self, DomainError> {
        let balance = NonNegativeAmount::new("balance", balance)?;
        Ok(Self {
            account_number,
            owner,
            balance: balance.get(),
        })
    }

    /// Returns the account number.
    #[inline]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Returns the account owner.
    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the current balance.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Credit `amount` to the account.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `amount` is not positive.
    pub fn deposit(&mut self, amount: f64) -> Result<(), DomainError> {
        guarded(Self::ENTITY, "deposit", || self.credit(amount))
    }

    /// Debit `amount` from the account.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `amount` is not positive or
    /// exceeds the current balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), DomainError> {
        guarded(Self::ENTITY, "withdraw", || self.debit(amount))
    }

    fn credit(&mut self, amount: f64) -> Result<(), DomainError> {
        let amount = PositiveAmount::new("amount", amount)?;
        let balance = self.balance + amount.get();
        if !balance.is_finite() {
            return Err(DomainError::invalid_value("balance would overflow"));
        }
        self.balance = balance;
        Ok(())
    }

    fn debit(&mut self, amount: f64) -> Result<(), DomainError> {
        let amount = PositiveAmount::new("amount", amount)?;
        if amount.get() > self.balance {
            return Err(DomainError::invalid_value(format!(
                "insufficient funds: balance {} is less than {}",
                self.balance, amount
            )));
        }
        self.balance -= amount.get();
        Ok(())
    }
}

impl GuardedEntity for BankAccount {
    const ENTITY: &'static str = "BankAccount";
    const OPERATIONS: &'static [&'static str] = &["deposit", "withdraw"];

    fn from_json(arguments: &Value) -> Result<Self, DomainError> {
        guarded(Self::ENTITY, "new", || {
            let account_number = args::text(
                args::required(arguments, "accountNumber")?,
                "accountNumber",
            )?;
            let owner = args::text(args::required(arguments, "owner")?, "owner")?;
            let balance = args::optional(arguments, "balance")?
                .map(|value| args::number(value, "balance"))
                .transpose()?
                .unwrap_or(0.0);
            Self::build(account_number.to_owned(), owner.to_owned(), balance)
        })
    }

    fn apply(&mut self, operation: &str, argument: &Value) -> Result<(), DomainError> {
        guarded(Self::ENTITY, operation, || match operation {
            "deposit" => self.credit(args::number(argument, "amount")?),
            "withdraw" => self.debit(args::number(argument, "amount")?),
            _ => Err(DomainError::unknown_operation(Self::ENTITY, operation)),
        })
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BankAccountWireFormat {
    account_number: String,
    owner: String,
    #[serde(default)]
    balance: f64,
}

impl Serialize for BankAccount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BankAccountWireFormat {
            account_number: self.account_number.clone(),
            owner: self.owner.clone(),
            balance: self.balance,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BankAccount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = BankAccountWireFormat::deserialize(deserializer)?;
        BankAccount::build(wire.account_number, wire.owner, wire.balance)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn create_test_account() -> BankAccount {
        BankAccount::new("1234567890", "Ivanov").unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_opens_with_zero_balance() {
            let account = create_test_account();
            assert_eq!(account.account_number(), "1234567890");
            assert_eq!(account.owner(), "Ivanov");
            assert_eq!(account.balance(), 0.0);
        }

        #[test]
        fn negative_opening_balance_is_rejected() {
            let err = BankAccount::with_balance("1", "Petrova", -0.01).unwrap_err();
            assert_eq!(err, DomainError::invalid_value("balance cannot be negative"));
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn deposit_then_overdraw() {
            let mut account = BankAccount::with_balance("1234567890", "Ivanov", 0.0).unwrap();

            account.deposit(500.0).unwrap();
            assert_eq!(account.balance(), 500.0);

            let err = account.withdraw(600.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert!(err.to_string().contains("insufficient funds"));
            assert_eq!(account.balance(), 500.0);
        }

        #[test]
        fn withdraw_entire_balance() {
            let mut account = BankAccount::with_balance("1", "Smirnov", 250.0).unwrap();
            account.withdraw(250.0).unwrap();
            assert_eq!(account.balance(), 0.0);
        }

        #[test]
        fn zero_and_negative_amounts_are_rejected() {
            let mut account = BankAccount::with_balance("1", "Smirnov", 100.0).unwrap();

            assert!(account.deposit(0.0).is_err());
            assert!(account.deposit(-10.0).is_err());
            assert!(account.withdraw(0.0).is_err());
            assert!(account.withdraw(-10.0).is_err());
            assert_eq!(account.balance(), 100.0);
        }

        #[test]
        fn sign_check_runs_before_funds_check() {
            let mut account = create_test_account();
            let err = account.withdraw(-5.0).unwrap_err();
            assert_eq!(err, DomainError::invalid_value("amount must be positive"));
        }

        #[test]
        fn deposit_past_largest_balance_is_rejected() {
            let mut account = BankAccount::with_balance("1", "Smirnov", f64::MAX).unwrap();

            let err = account.deposit(f64::MAX).unwrap_err();
            assert_eq!(err, DomainError::invalid_value("balance would overflow"));
            assert_eq!(account.balance(), f64::MAX);

            let err = account.apply("deposit", &json!(f64::MAX)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert_eq!(account.balance(), f64::MAX);
        }
    }

    mod dynamic {
        use super::*;

        #[test]
        fn from_json_builds_account() {
            let account = BankAccount::from_json(&json!({
                "accountNumber": "0987654321",
                "owner": "Maria Petrova",
                "balance": 10
            }))
            .unwrap();
            assert_eq!(account.balance(), 10.0);
        }

        #[test]
        fn from_json_rejects_numeric_account_number() {
            let err = BankAccount::from_json(&json!({
                "accountNumber": 1234567890,
                "owner": "Ivanov"
            }))
            .unwrap_err();
            assert_eq!(err, DomainError::invalid_type("accountNumber", "text"));
        }

        #[test]
        fn from_json_rejects_text_balance() {
            let err = BankAccount::from_json(&json!({
                "accountNumber": "1",
                "owner": "Ivanov",
                "balance": "100"
            }))
            .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType);
        }

        #[test]
        fn apply_reports_type_before_sign() {
            let mut account = create_test_account();
            let err = account.apply("deposit", &json!("-5")).unwrap_err();
            assert_eq!(err, DomainError::invalid_type("amount", "a number"));
        }

        #[test]
        fn apply_dispatches_both_operations() {
            let mut account = create_test_account();
            account.apply("deposit", &json!(300)).unwrap();
            account.apply("withdraw", &json!(120.5)).unwrap();
            assert_eq!(account.balance(), 179.5);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serialize_produces_camel_case() {
            let json = serde_json::to_value(create_test_account()).unwrap();
            assert_eq!(
                json,
                json!({ "accountNumber": "1234567890", "owner": "Ivanov", "balance": 0.0 })
            );
        }

        #[test]
        fn deserialize_rejects_negative_balance() {
            let json = r#"{"accountNumber":"1","owner":"Ivanov","balance":-1.0}"#;
            assert!(serde_json::from_str::<BankAccount>(json).is_err());
        }
    }
}
