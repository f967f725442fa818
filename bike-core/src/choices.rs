//! Option tables for the select inputs of the prediction form.

use crate::form::Field;
use crate::season::{self, Season};

/// One `<option>` of a select input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

const WEEKDAYS: [(&str, &str); 7] = [
    ("0", "Понедельник"),
    ("1", "Вторник"),
    ("2", "Среда"),
    ("3", "Четверг"),
    ("4", "Пятница"),
    ("5", "Суббота"),
    ("6", "Воскресенье"),
];

const WEATHER: [(&str, &str); 4] = [
    ("1", "Чисто"),
    ("2", "Облачно"),
    ("3", "Дождь"),
    ("4", "Сильный дождь"),
];

const HOLIDAY: [(&str, &str); 2] = [("true", "Праздник"), ("false", "Рабочий день")];

const WORKING_DAY: [(&str, &str); 2] = [("true", "Рабочий день"), ("false", "Выходной")];

/// Label of the empty option heading each select.
pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Season => "Выберите сезон",
        Field::Month => "Выберите месяц",
        Field::Weekday => "Выберите день",
        _ => "Не выбрано",
    }
}

/// Options for a select field, excluding the placeholder.
///
/// The month list depends on the currently selected season. Free-text fields
/// have no options.
pub fn options(field: Field, season_value: &str) -> Vec<Choice> {
    let table: &[(&str, &str)] = match field {
        Field::Season => {
            return Season::ALL
                .iter()
                .map(|s| Choice::new(s.code(), s.label()))
                .collect();
        }
        Field::Month => {
            return season::available_months(season_value)
                .iter()
                .filter_map(|m| season::month_name(*m).map(|name| Choice::new(m.to_string(), name)))
                .collect();
        }
        Field::Weekday => &WEEKDAYS,
        Field::Weather => &WEATHER,
        Field::Holiday => &HOLIDAY,
        Field::WorkingDay => &WORKING_DAY,
        Field::Hour | Field::Temperature | Field::Humidity | Field::WindSpeed => &[],
    };
    table
        .iter()
        .map(|(value, label)| Choice::new(*value, *label))
        .collect()
}

/// Whether the field is rendered as a select rather than a number input.
pub fn is_select(field: Field) -> bool {
    !matches!(
        field,
        Field::Hour | Field::Temperature | Field::Humidity | Field::WindSpeed
    )
}

/// Number input attributes: (min, max, step).
pub fn number_bounds(field: Field) -> (Option<&'static str>, Option<&'static str>, Option<&'static str>) {
    match field {
        Field::Hour => (Some("0"), Some("23"), None),
        Field::Humidity => (Some("0"), Some("100"), None),
        Field::Temperature => (None, None, Some("0.1")),
        _ => (None, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn test_month_options_follow_season() {
        let spring = options(Field::Month, "1");
        assert_eq!(values(&spring), vec!["3", "4", "5"]);
        assert_eq!(spring[0].label, "март");

        let winter = options(Field::Month, "4");
        assert_eq!(values(&winter), vec!["12", "1", "2"]);
        assert_eq!(winter[0].label, "декабрь");

        assert!(options(Field::Month, "").is_empty());
    }

    #[test]
    fn test_fixed_tables() {
        assert_eq!(values(&options(Field::Season, "")), vec!["1", "2", "3", "4"]);
        assert_eq!(options(Field::Weekday, "").len(), 7);
        assert_eq!(options(Field::Weekday, "")[0].label, "Понедельник");
        assert_eq!(values(&options(Field::Holiday, "")), vec!["true", "false"]);
        assert_eq!(options(Field::WorkingDay, "")[1].label, "Выходной");
        assert!(options(Field::Hour, "").is_empty());
    }

    #[test]
    fn test_select_fields() {
        let selects: Vec<Field> = Field::ALL.into_iter().filter(|f| is_select(*f)).collect();
        assert_eq!(
            selects,
            vec![
                Field::Season,
                Field::Month,
                Field::Weekday,
                Field::Weather,
                Field::Holiday,
                Field::WorkingDay
            ]
        );
        assert_eq!(placeholder(Field::Weather), "Не выбрано");
    }
}
