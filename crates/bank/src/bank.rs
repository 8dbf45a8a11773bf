//! Bank - transfer orchestration
//!
//! Drives the four-step transfer scenario against the treasury and the
//! converter, reporting through whichever `TransferPort` the caller supplies:
//!
//! 1. validate the amount and resolve both accounts
//! 2. quote the conversion and ask for confirmation (cross-currency only)
//! 3. debit the source, credit the destination
//! 4. report completion
//!
//! Progress for a step is reported as the step is entered. Domain errors never
//! escape `transfer`: they end the scenario as a discarded transfer with a
//! single terminal notification.

use log::{debug, error, info, warn};
use rust_decimal::Decimal;
use tally_core::{Account, Amount, ConversionQuote, Currency, Money, TOTAL_STEPS, TransferRequest};
use tally_ports::{
    BankResult, CurrencyConverter, TransferError, TransferOutcome, TransferPort, TransferResult,
};

use crate::config::{ConfigError, SeedConfig};
use crate::exchange::Exchange;
use crate::treasury::Treasury;

/// Message of a successful transfer
pub const COMPLETED_MESSAGE: &str = "Transfer completed";

/// Message of a transfer whose conversion was declined
pub const DECLINED_MESSAGE: &str = "Currency conversion not approved";

/// Why a transfer stopped before completion
enum Abort {
    /// The port declined the conversion quote
    Declined,
    /// A domain error
    Failed(TransferError),
}

impl From<TransferError> for Abort {
    fn from(err: TransferError) -> Self {
        Abort::Failed(err)
    }
}

/// Transfer orchestrator composing a treasury and a currency converter
#[derive(Debug)]
pub struct Bank<C = Exchange> {
    treasury: Treasury,
    converter: C,
}

impl Bank<Exchange> {
    /// Build a fresh bank from seed data
    pub fn from_config(config: &SeedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let treasury = config.build_treasury()?;
        let exchange = config.build_exchange();

        info!(
            "Bank ready: {} accounts, {} rates via {}",
            treasury.len(),
            exchange.pair_count(),
            exchange.name()
        );
        Ok(Self::new(treasury, exchange))
    }
}

impl<C: CurrencyConverter> Bank<C> {
    pub fn new(treasury: Treasury, converter: C) -> Self {
        Self {
            treasury,
            converter,
        }
    }

    pub fn treasury(&self) -> &Treasury {
        &self.treasury
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Price a conversion of `amount` between two currencies
    pub fn quote(
        &self,
        amount: Amount,
        from: &Currency,
        to: &Currency,
    ) -> BankResult<ConversionQuote> {
        let conversion = self.converter.convert(amount, from, to)?;
        Ok(ConversionQuote::new(
            Money::new(amount, from.clone()).with_minor_units(self.converter.minor_units(from)),
            Money::new(conversion.amount, to.clone())
                .with_minor_units(self.converter.minor_units(to)),
            conversion.rate,
        ))
    }

    /// Run one transfer to completion or abort
    ///
    /// Exactly one `report_transfer_result` is delivered, as the final call
    /// on `port`. Balances change only if the transfer completes.
    pub fn transfer(
        &self,
        request: &TransferRequest,
        port: &mut dyn TransferPort,
    ) -> TransferResult {
        info!(
            "Transfer {}: {} -> {}, amount={}",
            request.id, request.from, request.to, request.amount
        );

        let mut quote = None;
        let outcome = self.execute(request, port, &mut quote);

        let (outcome, message) = match outcome {
            Ok(()) => {
                info!("Transfer {} completed", request.id);
                port.report_transfer_result(true, COMPLETED_MESSAGE);
                (TransferOutcome::Completed, COMPLETED_MESSAGE.to_string())
            }
            Err(Abort::Declined) => {
                info!("Transfer {} discarded: conversion declined", request.id);
                port.discard_transfer();
                port.report_transfer_result(false, DECLINED_MESSAGE);
                (
                    TransferOutcome::Discarded { kind: None },
                    DECLINED_MESSAGE.to_string(),
                )
            }
            Err(Abort::Failed(err)) => {
                warn!("Transfer {} discarded: {}", request.id, err);
                let message = err.to_string();
                port.report_error(&err);
                port.discard_transfer();
                port.report_transfer_result(false, &message);
                (
                    TransferOutcome::Discarded {
                        kind: Some(err.kind()),
                    },
                    message,
                )
            }
        };

        TransferResult {
            transfer_id: request.id,
            outcome,
            message,
            quote,
        }
    }

    fn execute(
        &self,
        request: &TransferRequest,
        port: &mut dyn TransferPort,
        quote: &mut Option<ConversionQuote>,
    ) -> Result<(), Abort> {
        // Step 1: check amount, accounts and funds
        port.report_transfer_progress(1, TOTAL_STEPS);
        let (source, destination) = self.validate(request)?;

        // Step 2: price the conversion and ask for confirmation
        port.report_transfer_progress(2, TOTAL_STEPS);
        let credit_amount = if source.currency == destination.currency {
            request.amount
        } else {
            let priced = self.quote(request.amount, &source.currency, &destination.currency)?;
            debug!("Transfer {}: {}", request.id, priced);
            if priced.target.amount <= Decimal::ZERO {
                return Err(TransferError::InvalidAmount(format!(
                    "{} converts to {}",
                    priced.source, priced.target
                ))
                .into());
            }

            let approved = port.confirm_currency_conversion(&priced);
            let amount = priced.target.amount;
            *quote = Some(priced);
            if !approved {
                return Err(Abort::Declined);
            }
            amount
        };

        // Step 3: move the funds
        port.report_transfer_progress(3, TOTAL_STEPS);
        self.settle(request, &source, &destination, credit_amount)?;

        // Step 4: done
        port.report_transfer_progress(4, TOTAL_STEPS);
        Ok(())
    }

    fn validate(&self, request: &TransferRequest) -> BankResult<(Account, Account)> {
        if request.amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount(format!(
                "amount must be positive, got {}",
                request.amount
            )));
        }

        let source = self.treasury.get_account(&request.from)?;
        let destination = self.treasury.get_account(&request.to)?;

        // The debited amount must be exactly what the user is shown
        let minor_units = self.converter.minor_units(&source.currency);
        if request.amount.normalize().scale() > minor_units {
            return Err(TransferError::InvalidAmount(format!(
                "{} has more than {} decimal places for {}",
                request.amount, minor_units, source.currency
            )));
        }

        // Refuse before quoting so a doomed transfer is never confirmed
        if !source.can_cover(request.amount) {
            return Err(TransferError::InsufficientFunds {
                account: source.id,
                requested: request.amount,
                available: source.balance,
            });
        }

        Ok((source, destination))
    }

    fn settle(
        &self,
        request: &TransferRequest,
        source: &Account,
        destination: &Account,
        credit_amount: Amount,
    ) -> BankResult<()> {
        self.treasury.debit(&source.id, request.amount, &source.currency)?;

        if let Err(err) = self
            .treasury
            .credit(&destination.id, credit_amount, &destination.currency)
        {
            error!(
                "Transfer {}: credit to {} failed after debit ({}), reversing debit",
                request.id, destination.id, err
            );
            self.treasury
                .credit(&source.id, request.amount, &source.currency)
                .map_err(|reversal| {
                    error!(
                        "Transfer {}: debit reversal on {} failed: {}",
                        request.id, source.id, reversal
                    );
                    TransferError::Internal(format!(
                        "credit failed ({}) and debit reversal failed ({})",
                        err, reversal
                    ))
                })?;
            return Err(TransferError::Internal(format!(
                "credit to {} failed: {}",
                destination.id, err
            )));
        }

        Ok(())
    }
}
