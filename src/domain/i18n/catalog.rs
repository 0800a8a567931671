//! Built-in message catalogs

use super::language::Language;

/// Messages shown to end users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Username did not resolve to a directory entry
    UserNotFound,
    /// Directory backend could not be queried
    DirectoryUnavailable,
}

/// Resolves message keys for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translate(&self, key: MessageKey) -> &'static str {
        use Language::*;
        use MessageKey::*;

        match (self.language, key) {
            (En, UserNotFound) => "This user was not found!",
            (De, UserNotFound) => "Dieser Benutzer wurde nicht gefunden!",
            (Fr, UserNotFound) => "Cet utilisateur n'a pas été trouvé !",
            (Es, UserNotFound) => "¡No se encontró este usuario!",
            (En, DirectoryUnavailable) => "The LDAP directory is not available.",
            (De, DirectoryUnavailable) => "Das LDAP-Verzeichnis ist nicht erreichbar.",
            (Fr, DirectoryUnavailable) => "L'annuaire LDAP n'est pas disponible.",
            (Es, DirectoryUnavailable) => "El directorio LDAP no está disponible.",
        }
    }

    /// Not-found message followed by the username in parentheses
    pub fn user_not_found(&self, username: &str) -> String {
        format!("{} ({})", self.translate(MessageKey::UserNotFound), username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        let translator = Translator::default();
        assert_eq!(translator.language(), Language::En);
        assert_eq!(
            translator.translate(MessageKey::UserNotFound),
            "This user was not found!"
        );
    }

    #[test]
    fn test_user_not_found_message() {
        let translator = Translator::new(Language::En);
        assert_eq!(
            translator.user_not_found("obrien"),
            "This user was not found! (obrien)"
        );
    }

    #[test]
    fn test_every_language_translates_every_key() {
        for language in [Language::En, Language::De, Language::Fr, Language::Es] {
            let translator = Translator::new(language);
            for key in [MessageKey::UserNotFound, MessageKey::DirectoryUnavailable] {
                assert!(!translator.translate(key).is_empty());
            }
        }
    }

    #[test]
    fn test_german_catalog() {
        let translator = Translator::new(Language::De);
        assert_eq!(
            translator.user_not_found("jdoe"),
            "Dieser Benutzer wurde nicht gefunden! (jdoe)"
        );
    }
}
