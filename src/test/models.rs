#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use strum::IntoEnumIterator;

    use crate::{
        error::ValidationError,
        models::{Currency, DateKey, DayRates, HistoryEntry, RateHistory, RateRecord},
    };

    fn sample_history() -> RateHistory {
        let mut history = RateHistory::new();
        history.push(HistoryEntry::new(
            "18.10.2026".parse().unwrap(),
            DayRates::from([
                (Currency::Usd, RateRecord::new(27.5, 27.0)),
                (Currency::Eur, RateRecord::new(30.1, 29.6)),
            ]),
        ));
        history.push(HistoryEntry::new(
            "17.10.2026".parse().unwrap(),
            DayRates::from([(Currency::Usd, RateRecord::new(27.4, 26.9))]),
        ));
        history
    }

    #[test]
    fn date_key_uses_day_month_year() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
        assert_eq!(key.to_string(), "07.03.2026");
        assert_eq!("07.03.2026".parse::<DateKey>().unwrap(), key);
    }

    #[test]
    fn date_key_rejects_other_shapes() {
        for raw in ["7.3.2026", "2026-03-07", "07/03/2026", "31.02.2026", "", " 07.03.2026"] {
            assert!(raw.parse::<DateKey>().is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn date_key_steps_back_across_boundaries() {
        let new_year: DateKey = "01.01.2026".parse().unwrap();
        assert_eq!(new_year.previous().unwrap().to_string(), "31.12.2025");

        let march: DateKey = "01.03.2024".parse().unwrap();
        assert_eq!(march.previous().unwrap().to_string(), "29.02.2024");

        assert_eq!(march.days_back(0).unwrap(), march);
        assert_eq!(march.days_back(9).unwrap().to_string(), "21.02.2024");
    }

    #[test]
    fn currency_codes_are_case_insensitive() {
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_code(" Eur ").unwrap(), Currency::Eur);
        assert_eq!(
            Currency::from_code("UAH"),
            Err(ValidationError::UnsupportedCurrency(String::from("UAH")))
        );

        for currency in Currency::iter() {
            let code = currency.to_string();
            assert_eq!(code, code.to_uppercase());
            assert_eq!(Currency::from_code(&code).unwrap(), currency);
        }
    }

    #[test]
    fn currency_selection_drops_repeats() {
        let codes = vec![
            String::from("EUR"),
            String::from("usd"),
            String::from("eur"),
        ];
        assert_eq!(
            Currency::parse_selection(&codes).unwrap(),
            vec![Currency::Eur, Currency::Usd]
        );
        assert_eq!(Currency::parse_selection(&[]).unwrap(), Currency::defaults());
    }

    #[test]
    fn history_serializes_as_date_keyed_objects() {
        let value = serde_json::to_value(sample_history()).unwrap();

        assert_eq!(
            value,
            json!([
                {
                    "18.10.2026": {
                        "USD": { "sale": 27.5, "purchase": 27.0 },
                        "EUR": { "sale": 30.1, "purchase": 29.6 }
                    }
                },
                {
                    "17.10.2026": {
                        "USD": { "sale": 27.4, "purchase": 26.9 }
                    }
                }
            ])
        );
    }

    #[test]
    fn history_survives_a_json_round_trip() {
        let history = sample_history();
        let text = serde_json::to_string_pretty(&history).unwrap();
        let parsed: RateHistory = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, history);
    }

    #[test]
    fn history_entry_needs_exactly_one_date() {
        let two_dates = json!([{ "18.10.2026": {}, "17.10.2026": {} }]);
        assert!(serde_json::from_value::<RateHistory>(two_dates).is_err());

        let no_date = json!([{}]);
        assert!(serde_json::from_value::<RateHistory>(no_date).is_err());
    }

    #[test]
    fn history_ignores_repeated_dates() {
        let mut history = sample_history();
        let repeat = HistoryEntry::new("18.10.2026".parse().unwrap(), DayRates::new());

        assert!(!history.push(repeat));
        assert_eq!(history.len(), 2);
        assert_eq!(
            history
                .get(&"18.10.2026".parse().unwrap(), Currency::Usd)
                .map(|r| *r.sale()),
            Some(27.5)
        );
    }

    #[test]
    fn history_with_a_repeated_date_is_rejected() {
        let repeated = json!([
            { "18.10.2026": { "USD": { "sale": 27.5, "purchase": 27.0 } } },
            { "18.10.2026": { "USD": { "sale": 27.6, "purchase": 27.1 } } }
        ]);

        let err = serde_json::from_value::<RateHistory>(repeated).unwrap_err();
        assert!(err.to_string().contains("18.10.2026"));
    }
}
