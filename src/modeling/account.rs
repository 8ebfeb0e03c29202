//! A bank account that rejects invalid amounts and overdrafts.

use serde::Serialize;

use crate::error::{Error, Result};

/// A bank account whose balance only changes through validated deposits
/// and withdrawals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankAccount {
    account_number: String,
    balance: f64,
}

impl BankAccount {
    /// Opens an account with an initial balance.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAmount`] if `initial` is negative or not finite.
    pub fn open(account_number: impl Into<String>, initial: f64) -> Result<Self> {
        if !initial.is_finite() || initial < 0.0 {
            return Err(Error::InvalidAmount(initial));
        }
        Ok(Self {
            account_number: account_number.into(),
            balance: initial,
        })
    }

    /// Account identifier.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds `amount` and returns the new balance.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAmount`] unless `amount` is positive and finite.
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        check_amount(amount)?;
        self.balance += amount;
        debug_event!(account = %self.account_number, amount = amount, "deposit");
        Ok(self.balance)
    }

    /// Removes `amount` and returns the new balance.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAmount`] unless `amount` is positive and finite,
    /// and [`Error::InsufficientFunds`] if it exceeds the balance. The balance
    /// is unchanged on error.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        check_amount(amount)?;
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        debug_event!(account = %self.account_number, amount = amount, "withdraw");
        Ok(self.balance)
    }
}

fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidAmount(amount))
    }
}
