use std::{env, str::FromStr};

pub fn read_required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} not set", name))
}

pub fn read_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn read_parsed_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => parse_or_panic(name, &raw),
        Err(_) => default,
    }
}

fn parse_or_panic<T: FromStr>(name: &str, raw: &str) -> T {
    raw.trim()
        .parse::<T>()
        .unwrap_or_else(|_| panic!("Invalid value for {}: {}", name, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_or_panic::<u32>("PORT", " 8080 "), 8080);
    }

    #[test]
    #[should_panic(expected = "Invalid value for PORT")]
    fn rejects_garbage_numbers() {
        parse_or_panic::<u32>("PORT", "eighty");
    }

    #[test]
    fn falls_back_to_default_when_unset() {
        assert_eq!(
            read_parsed_or::<i64>("TABLESIDE_TEST_SURELY_UNSET_VARIABLE", 24),
            24
        );
        assert_eq!(
            read_or("TABLESIDE_TEST_SURELY_UNSET_VARIABLE", "uploads"),
            "uploads"
        );
    }
}
