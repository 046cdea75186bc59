//! UI locale and string table

use crate::config::ConsoleConfig;
use crate::cookies::{cookie_assignment, cookie_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    En,
    #[default]
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Self::En, Self::Fr];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Locale stored in the cookie header, if any
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        cookie_value(header, ConsoleConfig::LOCALE_COOKIE).and_then(Self::from_code)
    }

    /// First-visit guess: French browsers get French, everyone else English.
    pub fn from_browser_language(language: &str) -> Self {
        if language.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("fr")) {
            Self::Fr
        } else {
            Self::En
        }
    }

    /// Resolve the locale to render with. Falls back to French when no cookie
    /// has been written yet.
    pub fn resolve(cookie_header: &str) -> Self {
        Self::from_cookie_header(cookie_header).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Fr => "🇫🇷",
        }
    }

    /// `document.cookie` assignment persisting this locale for a year
    pub fn cookie(self) -> String {
        cookie_assignment(
            ConsoleConfig::LOCALE_COOKIE,
            self.code(),
            Some(ConsoleConfig::LOCALE_COOKIE_MAX_AGE),
        )
    }

    pub fn text(self, text: Text) -> &'static str {
        let (en, fr) = text.pair();
        match self {
            Self::En => en,
            Self::Fr => fr,
        }
    }
}

/// Every translatable UI string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    // Navigation
    NavDashboard,
    NavCompanies,
    Logout,
    Language,

    // Login
    LoginTitle,
    LoginSubtitle,
    Email,
    Password,
    RememberMe,
    ForgotPasswordLink,
    SignIn,
    SigningIn,
    LoginFailed,
    LoginSuccess,

    // Password reset
    ForgotPasswordTitle,
    ForgotPasswordSubtitle,
    SendResetLink,
    ResetLinkSentTitle,
    ResetLinkSent,
    BackToLogin,
    NewPasswordTitle,
    NewPasswordSubtitle,
    NewPassword,
    ConfirmPassword,
    ResetPassword,
    PasswordResetDone,
    MissingResetToken,
    RequestFailed,

    // Dashboard
    DashboardTitle,
    Welcome,
    DashboardSubtitle,
    TotalCompanies,
    TotalCompaniesDesc,
    ActiveCompanies,
    ActiveCompaniesDesc,
    InactiveCompanies,
    InactiveCompaniesDesc,
    DashboardLoadFailed,

    // Company list
    CompaniesTitle,
    AddCompany,
    SearchCompanies,
    ColumnNo,
    ColumnLogo,
    ColumnCompanyName,
    ColumnCompanyEmail,
    ColumnContactPerson,
    ColumnContactPhone,
    ColumnStatus,
    ColumnActions,
    NoData,
    View,
    Delete,
    Cancel,
    DeleteCompany,
    DeleteConfirmation,
    ActivateCompany,
    DeactivateCompany,
    ActivateConfirmation,
    DeactivateConfirmation,
    CompanyDeleted,
    FailedToDelete,
    CompanyActivated,
    CompanyDeactivated,
    FailedToUpdateStatus,
    FailedToLoadCompanies,

    // Company form
    UpdateCompany,
    TabBasicInfo,
    TabDetails,
    TabCredentials,
    CompanyName,
    ContactPerson,
    ContactPhone,
    Logo,
    UploadLogo,
    RemoveLogo,
    SirenNumber,
    LegalName,
    Address,
    NafCode,
    LegalStatus,
    WorkforceSize,
    Next,
    Back,
    Save,
    Saving,
    Loading,
    CompanyCreated,
    CompanyUpdated,
    FailedToSave,
    FailedToLoadCompany,
}

impl Text {
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Self::NavDashboard => ("Dashboard", "Tableau de bord"),
            Self::NavCompanies => ("Manage Companies", "Gérer les entreprises"),
            Self::Logout => ("Logout", "Déconnexion"),
            Self::Language => ("Language", "Langue"),

            Self::LoginTitle => ("Welcome back", "Bon retour"),
            Self::LoginSubtitle => (
                "Sign in to manage your companies",
                "Connectez-vous pour gérer vos entreprises",
            ),
            Self::Email => ("Email", "E-mail"),
            Self::Password => ("Password", "Mot de passe"),
            Self::RememberMe => ("Remember me", "Se souvenir de moi"),
            Self::ForgotPasswordLink => ("Forgot password?", "Mot de passe oublié ?"),
            Self::SignIn => ("Sign in", "Se connecter"),
            Self::SigningIn => ("Signing in...", "Connexion..."),
            Self::LoginFailed => ("Login failed", "Échec de la connexion"),
            Self::LoginSuccess => ("Login successful!", "Connexion réussie !"),

            Self::ForgotPasswordTitle => ("Forgot password", "Mot de passe oublié"),
            Self::ForgotPasswordSubtitle => (
                "Enter your email and we will send you a reset link",
                "Saisissez votre e-mail pour recevoir un lien de réinitialisation",
            ),
            Self::SendResetLink => ("Send reset link", "Envoyer le lien"),
            Self::ResetLinkSentTitle => ("Check your inbox", "Consultez votre boîte mail"),
            Self::ResetLinkSent => (
                "If an account exists for this email, a reset link has been sent.",
                "Si un compte existe pour cet e-mail, un lien de réinitialisation a été envoyé.",
            ),
            Self::BackToLogin => ("Back to login", "Retour à la connexion"),
            Self::NewPasswordTitle => ("Set a new password", "Définir un nouveau mot de passe"),
            Self::NewPasswordSubtitle => (
                "Choose a password of at least 8 characters",
                "Choisissez un mot de passe d'au moins 8 caractères",
            ),
            Self::NewPassword => ("New password", "Nouveau mot de passe"),
            Self::ConfirmPassword => ("Confirm password", "Confirmer le mot de passe"),
            Self::ResetPassword => ("Reset password", "Réinitialiser"),
            Self::PasswordResetDone => (
                "Password updated, you can now sign in",
                "Mot de passe mis à jour, vous pouvez vous connecter",
            ),
            Self::MissingResetToken => (
                "This reset link is invalid or incomplete",
                "Ce lien de réinitialisation est invalide ou incomplet",
            ),

            Self::RequestFailed => ("Request failed", "La requête a échoué"),

            Self::DashboardTitle => ("Dashboard", "Tableau de bord"),
            Self::Welcome => ("Welcome", "Bienvenue"),
            Self::DashboardSubtitle => (
                "Here is an overview of your companies",
                "Voici un aperçu de vos entreprises",
            ),
            Self::TotalCompanies => ("Total companies", "Total des entreprises"),
            Self::TotalCompaniesDesc => ("All registered companies", "Toutes les entreprises inscrites"),
            Self::ActiveCompanies => ("Active companies", "Entreprises actives"),
            Self::ActiveCompaniesDesc => ("Companies with access", "Entreprises avec accès"),
            Self::InactiveCompanies => ("Inactive companies", "Entreprises inactives"),
            Self::InactiveCompaniesDesc => ("Companies without access", "Entreprises sans accès"),
            Self::DashboardLoadFailed => (
                "Failed to load dashboard data",
                "Impossible de charger le tableau de bord",
            ),

            Self::CompaniesTitle => ("Companies", "Entreprises"),
            Self::AddCompany => ("Add Company", "Ajouter une entreprise"),
            Self::SearchCompanies => ("Search companies...", "Rechercher des entreprises..."),
            Self::ColumnNo => ("No", "N°"),
            Self::ColumnLogo => ("Logo", "Logo"),
            Self::ColumnCompanyName => ("Company Name", "Nom de l'entreprise"),
            Self::ColumnCompanyEmail => ("Company Email", "E-mail de l'entreprise"),
            Self::ColumnContactPerson => ("Contact Person", "Contact"),
            Self::ColumnContactPhone => ("Contact Phone", "Téléphone"),
            Self::ColumnStatus => ("Status", "Statut"),
            Self::ColumnActions => ("Actions", "Actions"),
            Self::NoData => ("No data found.", "Aucune donnée trouvée."),
            Self::View => ("View", "Voir"),
            Self::Delete => ("Delete", "Supprimer"),
            Self::Cancel => ("Cancel", "Annuler"),
            Self::DeleteCompany => ("Delete Company", "Supprimer l'entreprise"),
            Self::DeleteConfirmation => (
                "Are you sure you want to delete",
                "Voulez-vous vraiment supprimer",
            ),
            Self::ActivateCompany => ("Activate Company", "Activer l'entreprise"),
            Self::DeactivateCompany => ("Deactivate Company", "Désactiver l'entreprise"),
            Self::ActivateConfirmation => (
                "Are you sure you want to activate",
                "Voulez-vous vraiment activer",
            ),
            Self::DeactivateConfirmation => (
                "Are you sure you want to deactivate",
                "Voulez-vous vraiment désactiver",
            ),
            Self::CompanyDeleted => ("Company deleted successfully", "Entreprise supprimée"),
            Self::FailedToDelete => ("Failed to delete company", "Échec de la suppression"),
            Self::CompanyActivated => ("Company activated", "Entreprise activée"),
            Self::CompanyDeactivated => ("Company deactivated", "Entreprise désactivée"),
            Self::FailedToUpdateStatus => (
                "Failed to update status",
                "Échec de la mise à jour du statut",
            ),
            Self::FailedToLoadCompanies => (
                "Failed to load companies",
                "Impossible de charger les entreprises",
            ),

            Self::UpdateCompany => ("Update Company", "Modifier l'entreprise"),
            Self::TabBasicInfo => ("Basic Info", "Informations"),
            Self::TabDetails => ("Details", "Détails"),
            Self::TabCredentials => ("Login Credentials", "Identifiants"),
            Self::CompanyName => ("Company name", "Nom de l'entreprise"),
            Self::ContactPerson => ("Contact person", "Personne à contacter"),
            Self::ContactPhone => ("Contact phone", "Téléphone du contact"),
            Self::Logo => ("Logo", "Logo"),
            Self::UploadLogo => ("Upload logo", "Téléverser un logo"),
            Self::RemoveLogo => ("Remove logo", "Retirer le logo"),
            Self::SirenNumber => ("SIREN number", "Numéro SIREN"),
            Self::LegalName => ("Legal name", "Raison sociale"),
            Self::Address => ("Address", "Adresse"),
            Self::NafCode => ("NAF code", "Code NAF"),
            Self::LegalStatus => ("Legal status", "Forme juridique"),
            Self::WorkforceSize => ("Workforce size", "Effectif"),
            Self::Next => ("Next", "Suivant"),
            Self::Back => ("Back", "Retour"),
            Self::Save => ("Save", "Enregistrer"),
            Self::Saving => ("Saving...", "Enregistrement..."),
            Self::Loading => ("Loading...", "Chargement..."),
            Self::CompanyCreated => ("Company created successfully!", "Entreprise créée !"),
            Self::CompanyUpdated => ("Company updated successfully!", "Entreprise mise à jour !"),
            Self::FailedToSave => ("Failed to save company", "Échec de l'enregistrement"),
            Self::FailedToLoadCompany => (
                "Failed to load company",
                "Impossible de charger l'entreprise",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_wins_and_defaults_to_french() {
        assert_eq!(Locale::resolve("SALES_CLOSE_MANAGE_LOCALE=en"), Locale::En);
        assert_eq!(Locale::resolve("SALES_CLOSE_MANAGE_LOCALE=de"), Locale::Fr);
        assert_eq!(Locale::resolve(""), Locale::Fr);
    }

    #[test]
    fn browser_language_prefix() {
        assert_eq!(Locale::from_browser_language("fr-CA"), Locale::Fr);
        assert_eq!(Locale::from_browser_language("en-US"), Locale::En);
        assert_eq!(Locale::from_browser_language("de"), Locale::En);
        assert_eq!(Locale::from_browser_language(""), Locale::En);
    }

    #[test]
    fn cookie_lasts_a_year() {
        assert_eq!(
            Locale::En.cookie(),
            "SALES_CLOSE_MANAGE_LOCALE=en; path=/; max-age=31536000"
        );
    }

    #[test]
    fn strings_follow_locale() {
        assert_eq!(Locale::En.text(Text::NoData), "No data found.");
        assert_eq!(Locale::Fr.text(Text::Logout), "Déconnexion");
    }
}
