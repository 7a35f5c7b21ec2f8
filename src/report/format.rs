use alloy::primitives::{
    U256,
    utils::{format_ether, format_units},
};
use rust_decimal::{Decimal, RoundingStrategy};

// 1234567 -> "1,234,567"
pub fn group_digits(value: U256) -> String {
    group_integer(&value.to_string())
}

// wei -> "0.006", keeping one decimal for whole values ("100.0")
pub fn format_native(wei: U256) -> String {
    trim_fraction(&format_ether(wei))
}

pub fn format_gwei(wei: U256) -> String {
    format_units(wei, "gwei")
        .map(|gwei| trim_fraction(&gwei))
        .unwrap_or_else(|_| format!("{wei} wei"))
}

// half a cent rounds away from zero
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// fiat amounts are shown to the cent: "$2,600.00"
pub fn format_fiat(value: Decimal) -> String {
    let rounded = format!("{:.2}", round_cents(value));
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", rounded.as_str()),
    };

    match digits.split_once('.') {
        Some((whole, cents)) => format!("{sign}${}.{cents}", group_integer(whole)),
        None => format!("{sign}${}", group_integer(digits)),
    }
}

fn group_integer(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

fn trim_fraction(value: &str) -> String {
    match value.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => format!("{value}.0"),
    }
}
