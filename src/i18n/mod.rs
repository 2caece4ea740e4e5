use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for user-facing strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Short language code ("en", "es")
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// BCP 47 tag handed to speech recognition / synthesis
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Es => "es-ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown locale code
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}': expected 'en' or 'es'", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "es" | "es-es" => Ok(Locale::Es),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("deliveryConfirmed", "Delivery Confirmed"),
    ("robotHalted", "All robots have been halted by emergency stop."),
    ("robotResumed", "Robot operations resumed."),
    ("emergencyStopConfirm", "Are you sure you want to stop all robots?"),
    ("listening", "Listening..."),
    ("robotVoiceFeedback", "Command received."),
    ("Error", "Error"),
    ("PleaseTryAgain", "Please try again."),
    ("attemptingRedelivery", "Attempting Redelivery"),
    ("noNotifications", "No new notifications."),
];

const ES: &[(&str, &str)] = &[
    ("deliveryConfirmed", "Entrega Confirmada"),
    ("robotHalted", "Todos los robots han sido detenidos por parada de emergencia."),
    ("robotResumed", "Operaciones de robots reanudadas."),
    ("emergencyStopConfirm", "¿Está seguro de que desea detener todos los robots?"),
    ("listening", "Escuchando..."),
    ("robotVoiceFeedback", "Comando recibido."),
    ("Error", "Error"),
    ("PleaseTryAgain", "Por favor, inténtelo de nuevo."),
    ("attemptingRedelivery", "Reintentando Entrega"),
    ("noNotifications", "No hay notificaciones nuevas."),
];

/// Key-based string lookup for the active locale.
///
/// Unknown keys fall back to the key itself, so a missing translation shows
/// up as its identifier rather than an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Look up `key` in the active table
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.locale {
            Locale::En => EN,
            Locale::Es => ES,
        };

        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_per_locale() {
        let en = Translator::new(Locale::En);
        let es = Translator::new(Locale::Es);

        assert_eq!(en.t("deliveryConfirmed"), "Delivery Confirmed");
        assert_eq!(es.t("deliveryConfirmed"), "Entrega Confirmada");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let translator = Translator::new(Locale::Es);
        assert_eq!(translator.t("notARealKey"), "notARealKey");
    }

    #[test]
    fn test_tables_have_same_keys() {
        for (key, _) in EN {
            assert!(ES.iter().any(|(k, _)| k == key), "missing es key {}", key);
        }
        assert_eq!(EN.len(), ES.len());
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ES-es".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Es.speech_tag(), "es-ES");
    }
}
