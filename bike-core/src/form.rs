//! Prediction input form: field values, change handling and validation.
//!
//! Values are kept as the strings the user typed or selected. The prediction
//! service does all numeric conversion, so nothing here parses numbers.

use crate::season;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One input of the prediction form.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Field {
    Season,
    Month,
    Hour,
    Weekday,
    Temperature,
    Weather,
    Humidity,
    WindSpeed,
    Holiday,
    WorkingDay,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Season,
        Field::Month,
        Field::Hour,
        Field::Weekday,
        Field::Temperature,
        Field::Weather,
        Field::Humidity,
        Field::WindSpeed,
        Field::Holiday,
        Field::WorkingDay,
    ];

    /// Fields that must be non-empty before a prediction can be requested.
    pub const REQUIRED: [Field; 5] = [
        Field::Season,
        Field::Month,
        Field::Hour,
        Field::Weekday,
        Field::Temperature,
    ];

    /// Wire name, as sent to the prediction service.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Season => "season",
            Field::Month => "mnth",
            Field::Hour => "hr",
            Field::Weekday => "weekday",
            Field::Temperature => "temp",
            Field::Weather => "weathersit",
            Field::Humidity => "hum",
            Field::WindSpeed => "windspeed",
            Field::Holiday => "holiday",
            Field::WorkingDay => "workingday",
        }
    }

    /// Form label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Season => "Сезон",
            Field::Month => "Месяц",
            Field::Hour => "Час (0-23)",
            Field::Weekday => "День недели",
            Field::Temperature => "Температура (°C)",
            Field::Weather => "Погода",
            Field::Humidity => "Влажность (%)",
            Field::WindSpeed => "Скорость ветра (м/с)",
            Field::Holiday => "Праздник",
            Field::WorkingDay => "Рабочий день",
        }
    }

    pub fn is_required(&self) -> bool {
        Field::REQUIRED.contains(self)
    }

    /// Message shown when a required field is left empty.
    pub fn required_message(&self) -> Option<&'static str> {
        match self {
            Field::Season => Some("Сезон обязателен"),
            Field::Month => Some("Месяц обязателен"),
            Field::Hour => Some("Час обязателен"),
            Field::Weekday => Some("День недели обязателен"),
            Field::Temperature => Some("Температура обязательна"),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of every form field. Serializes to the JSON body of a
/// prediction request.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct FormData {
    pub season: String,
    pub mnth: String,
    pub hr: String,
    pub weekday: String,
    pub temp: String,
    pub weathersit: String,
    pub hum: String,
    pub windspeed: String,
    pub holiday: String,
    pub workingday: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Season => &self.season,
            Field::Month => &self.mnth,
            Field::Hour => &self.hr,
            Field::Weekday => &self.weekday,
            Field::Temperature => &self.temp,
            Field::Weather => &self.weathersit,
            Field::Humidity => &self.hum,
            Field::WindSpeed => &self.windspeed,
            Field::Holiday => &self.holiday,
            Field::WorkingDay => &self.workingday,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Season => &mut self.season,
            Field::Month => &mut self.mnth,
            Field::Hour => &mut self.hr,
            Field::Weekday => &mut self.weekday,
            Field::Temperature => &mut self.temp,
            Field::Weather => &mut self.weathersit,
            Field::Humidity => &mut self.hum,
            Field::WindSpeed => &mut self.windspeed,
            Field::Holiday => &mut self.holiday,
            Field::WorkingDay => &mut self.workingday,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }
}

/// Per-field validation messages. A missing or empty entry means valid.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    /// True when no field carries a non-empty message.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|msg| msg.is_empty())
    }

    /// Message for `field`, if it has a non-empty one.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|msg| !msg.is_empty())
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Fields with a message, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Check the required fields of `data`.
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in Field::REQUIRED {
        if data.get(field).is_empty() {
            if let Some(message) = field.required_message() {
                errors.insert(field, message);
            }
        }
    }
    errors
}

/// Form state: values plus the errors from the last submission attempt.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PredictionForm {
    pub data: FormData,
    pub errors: FormErrors,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user edit.
    ///
    /// Clears the field's error without re-validating. Changing the season
    /// also clears the month, since the month choices depend on it.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
        self.errors.clear(field);
        if field == Field::Season {
            self.data.set(Field::Month, String::new());
        }
    }

    /// Months the month selector may offer right now.
    pub fn available_months(&self) -> &'static [u8] {
        season::available_months(&self.data.season)
    }

    /// Validate for submission.
    ///
    /// On failure the errors are stored for display and `None` is returned;
    /// otherwise returns the payload to send. Values are never reset here.
    pub fn submission(&mut self) -> Option<FormData> {
        let errors = validate(&self.data);
        if !errors.is_empty() {
            log::debug!(
                "Prediction form invalid: {}",
                errors
                    .iter()
                    .map(|(field, _)| field.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            self.errors = errors;
            return None;
        }
        Some(self.data.clone())
    }
}
