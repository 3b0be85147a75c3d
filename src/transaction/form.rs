//! The request body for creating and updating transactions and its validation.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Error,
    category::is_known_category,
    transaction::{NewTransaction, TransactionType},
};

/// The maximum number of characters (graphemes) in a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// The smallest amount that can be recorded.
pub const MIN_AMOUNT: f64 = 0.01;

/// The largest amount that can be recorded.
///
/// Keeps totals over any realistic number of transactions finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The JSON body sent by clients to create or replace a transaction.
///
/// Every field is optional at the type level so that a missing field can be
/// reported as [Error::MissingFields] instead of a generic parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// What the transaction was for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// How much money was earned or spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Either "income" or "expense".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// The category name, e.g. "Salary".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// When the transaction happened, as "YYYY-MM-DD" or an RFC 3339 date-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TransactionInput {
    /// Check every field and convert the input into a [NewTransaction].
    ///
    /// # Errors
    /// Returns:
    /// - [Error::MissingFields] if any field is absent, null or an empty string,
    /// - [Error::EmptyDescription] or [Error::DescriptionTooLong] for a bad description,
    /// - [Error::InvalidAmount] if the amount is not between 0.01 and [MAX_AMOUNT],
    /// - [Error::InvalidTransactionType] if the type is not "income" or "expense",
    /// - [Error::EmptyCategory] if the category is only whitespace,
    /// - or [Error::InvalidDate] if the date cannot be parsed.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let (
            Some(description),
            Some(amount),
            Some(transaction_type),
            Some(category),
            Some(date),
        ) = (
            self.description,
            self.amount,
            self.transaction_type,
            self.category,
            self.date,
        )
        else {
            return Err(Error::MissingFields);
        };

        if [&description, &transaction_type, &category, &date]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(Error::MissingFields);
        }

        let description = validate_description(description)?;
        let amount = validate_amount(amount)?;
        let transaction_type: TransactionType = transaction_type.parse()?;
        let category = validate_category(category, transaction_type)?;
        let date = parse_date(&date)?;

        Ok(NewTransaction {
            description,
            amount,
            transaction_type,
            category,
            date,
        })
    }
}

fn validate_description(description: String) -> Result<String, Error> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    let length = description.graphemes(true).count();

    if length > MAX_DESCRIPTION_LENGTH {
        Err(Error::DescriptionTooLong(length))
    } else {
        Ok(description)
    }
}

fn validate_amount(amount: f64) -> Result<f64, Error> {
    if (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount))
    }
}

fn validate_category(category: String, transaction_type: TransactionType) -> Result<String, Error> {
    if category.trim().is_empty() {
        return Err(Error::EmptyCategory);
    }

    if !is_known_category(transaction_type, &category) {
        tracing::warn!("Accepting {transaction_type} transaction with unlisted category {category:?}");
    }

    Ok(category)
}

/// Parse a calendar date from either "YYYY-MM-DD" or an RFC 3339 date-time.
///
/// Date-times are converted to UTC before taking the date.
///
/// # Errors
/// Returns an [Error::InvalidDate] if `text` is in neither format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT)
        .or_else(|_| {
            OffsetDateTime::parse(text, &Rfc3339)
                .map(|date_time| date_time.to_offset(UtcOffset::UTC).date())
        })
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}
