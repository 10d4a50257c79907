use crate::error::{LessonError, Result};

pub const NO_ARGUMENTS: &str = "No command-line arguments were entered.";
pub const NOT_AN_INTEGER: &str = "Did not enter in an integer argument.";

/// What the `product` program should report for a given argument list.
#[derive(Debug)]
pub enum Outcome {
    NoArguments,
    Product(i32),
    NotAnInteger(LessonError),
}

/// Parses every argument as a base-10 `i32`, stopping at the first failure.
pub fn parse_all(args: &[String]) -> Result<Vec<i32>> {
    args.iter()
        .map(|arg| {
            arg.parse::<i32>().map_err(|source| LessonError::NotAnInteger {
                arg: arg.clone(),
                source,
            })
        })
        .collect()
}

/// Multiplies the values together starting from 1. Overflow wraps.
pub fn product(values: &[i32]) -> i32 {
    values.iter().fold(1i32, |acc, &n| {
        let (next, overflowed) = acc.overflowing_mul(n);
        if overflowed {
            log::debug!("{} * {} wrapped around to {}", acc, n, next);
        }
        next
    })
}

pub fn report(args: &[String]) -> Outcome {
    if args.is_empty() {
        return Outcome::NoArguments;
    }

    match parse_all(args) {
        Ok(values) => {
            log::debug!("parsed {:?}", values);
            Outcome::Product(product(&values))
        }
        Err(err) => Outcome::NotAnInteger(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_product_of_two() {
        match report(&strings(&["6", "7"])) {
            Outcome::Product(p) => assert_eq!(p, 42),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_single_argument_is_itself() {
        assert!(matches!(report(&strings(&["-13"])), Outcome::Product(-13)));
    }

    #[test]
    fn test_signs_and_zero() {
        assert!(matches!(
            report(&strings(&["+3", "-4", "5"])),
            Outcome::Product(-60)
        ));
        assert!(matches!(
            report(&strings(&["9", "0", "123"])),
            Outcome::Product(0)
        ));
    }

    #[test]
    fn test_empty_arguments() {
        assert!(matches!(report(&[]), Outcome::NoArguments));
    }

    #[test]
    fn test_empty_product_is_one() {
        assert_eq!(product(&[]), 1);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(product(&[i32::MAX, 2]), -2);
        assert_eq!(product(&[65536, 65536]), 0);
    }

    #[test]
    fn test_non_integer_reports_first_bad_argument() {
        let err = parse_all(&strings(&["2", "abc", "x"])).unwrap_err();
        match &err {
            LessonError::NotAnInteger { arg, .. } => assert_eq!(arg, "abc"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), NOT_AN_INTEGER);
        assert_eq!(
            err.source().unwrap().to_string(),
            "invalid digit found in string"
        );
    }

    #[test]
    fn test_out_of_range_is_not_an_integer() {
        let outcome = report(&strings(&["99999999999"]));
        assert!(matches!(
            outcome,
            Outcome::NotAnInteger(LessonError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn test_whitespace_and_decimals_rejected() {
        assert!(parse_all(&strings(&[" 4"])).is_err());
        assert!(parse_all(&strings(&["4.0"])).is_err());
        assert!(parse_all(&strings(&[""])).is_err());
    }
}
