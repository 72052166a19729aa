//! Positional traveler-parameter assembly
//!
//! The passengers endpoint does not take a keyed map: it wants an ordered
//! list of `{name, value}` pairs whose order matches the site's own form
//! template. Caller-supplied fields override the template in place; any
//! field the template does not know is appended after it, in the order
//! the caller gave it.

use crate::types::NameValue;

/// The site's traveler form template, in submission order.
///
/// Field names are the Italian labels the server matches on.
pub const DEFAULT_TRAVELER_FIELDS: [(&str, &str); 14] = [
    ("Tipo Viaggiatore", "ADULTO"),
    ("Nome", ""),
    ("Cognome", ""),
    ("Loyalty Code", ""),
    ("Data di nascita", ""),
    ("Tipo documento", ""),
    ("Numero documento", ""),
    ("DATA_DOCUMENTO", ""),
    ("Nazione", ""),
    ("Provincia di emissione", ""),
    ("Comune di emissione", ""),
    ("NAZIONE_DI_NASCITA", ""),
    ("PROVINCIA_DI_NASCITA", ""),
    ("COMUNE_DI_NASCITA", ""),
];

/// Personal/document fields for one passenger
///
/// Only the fields that differ from the template need to be set:
///
/// ```
/// use lefrecce_core::Traveler;
///
/// let traveler = Traveler::new()
///     .field("Nome", "Mario")
///     .field("Cognome", "Rossi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Traveler {
    fields: Vec<(String, String)>,
}

impl Traveler {
    /// Create a traveler with every field at its template default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overriding the template value.
    ///
    /// Setting the same field twice keeps the last value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// The caller-supplied overrides, in the order they were set.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Merge a traveler's overrides against the template.
///
/// The template's insertion order is preserved exactly; overrides replace
/// values in place and unknown fields are appended. The result is the
/// positional list the server requires.
pub fn merge_traveler_parameters(traveler: &Traveler) -> Vec<NameValue> {
    let mut parameters: Vec<NameValue> = DEFAULT_TRAVELER_FIELDS
        .iter()
        .map(|(name, value)| NameValue {
            name: (*name).to_string(),
            value: (*value).to_string(),
        })
        .collect();

    for (name, value) in traveler.fields() {
        match parameters.iter_mut().find(|p| p.name == *name) {
            Some(parameter) => parameter.value = value.clone(),
            None => parameters.push(NameValue {
                name: name.clone(),
                value: value.clone(),
            }),
        }
    }

    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserve_template_order() {
        let parameters = merge_traveler_parameters(&Traveler::new());

        assert_eq!(parameters.len(), DEFAULT_TRAVELER_FIELDS.len());
        for (parameter, (name, value)) in parameters.iter().zip(DEFAULT_TRAVELER_FIELDS) {
            assert_eq!(parameter.name, name);
            assert_eq!(parameter.value, value);
        }
    }

    #[test]
    fn test_override_replaces_in_place() {
        let traveler = Traveler::new().field("Nome", "Mario");
        let parameters = merge_traveler_parameters(&traveler);

        // "Nome" stays in template position with the overridden value
        assert_eq!(parameters[1].name, "Nome");
        assert_eq!(parameters[1].value, "Mario");

        // Everything else keeps its default
        assert_eq!(parameters[0].name, "Tipo Viaggiatore");
        assert_eq!(parameters[0].value, "ADULTO");
        assert_eq!(parameters[2].name, "Cognome");
        assert_eq!(parameters[2].value, "");
        assert_eq!(parameters.len(), DEFAULT_TRAVELER_FIELDS.len());
    }

    #[test]
    fn test_unknown_fields_append_in_caller_order() {
        let traveler = Traveler::new()
            .field("Campo Extra", "x")
            .field("Altro Campo", "y");
        let parameters = merge_traveler_parameters(&traveler);

        assert_eq!(parameters.len(), DEFAULT_TRAVELER_FIELDS.len() + 2);
        assert_eq!(parameters[14].name, "Campo Extra");
        assert_eq!(parameters[14].value, "x");
        assert_eq!(parameters[15].name, "Altro Campo");
        assert_eq!(parameters[15].value, "y");
    }

    #[test]
    fn test_setting_a_field_twice_keeps_last_value() {
        let traveler = Traveler::new()
            .field("Nome", "Mario")
            .field("Nome", "Luigi");
        let parameters = merge_traveler_parameters(&traveler);

        assert_eq!(parameters[1].value, "Luigi");
        assert_eq!(parameters.len(), DEFAULT_TRAVELER_FIELDS.len());
    }

    #[test]
    fn test_merged_list_serializes_positionally() {
        let traveler = Traveler::new().field("Nome", "Mario");
        let parameters = merge_traveler_parameters(&traveler);
        let json = serde_json::to_value(&parameters).unwrap();

        // An array of {name, value} objects, never a keyed map
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "Tipo Viaggiatore");
        assert_eq!(json[0]["value"], "ADULTO");
        assert_eq!(json[1]["name"], "Nome");
        assert_eq!(json[1]["value"], "Mario");
    }
}
