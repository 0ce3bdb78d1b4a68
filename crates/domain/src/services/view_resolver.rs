//! Presentation view resolution for the public invitation page.
//!
//! Which view renders an invitation depends first on the event type and,
//! for weddings, on the religious variant. Anything unrecognized falls
//! back to the generic view rather than failing the request.

use serde::Serialize;

/// The named views a published invitation can render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationView {
    WeddingHinduTraditional,
    WeddingMuslimElegant,
    WeddingElegant,
    BirthdayFunColorful,
    AnniversaryGoldenElegant,
    BabyshowerSweetPink,
    GraduationSuccessModern,
    RetirementGoldenClassic,
    Generic,
}

impl PresentationView {
    /// Stable key, used to pick the client-side layout.
    pub fn key(&self) -> &'static str {
        match self {
            PresentationView::WeddingHinduTraditional => "wedding_hindu_traditional",
            PresentationView::WeddingMuslimElegant => "wedding_muslim_elegant",
            PresentationView::WeddingElegant => "wedding_elegant",
            PresentationView::BirthdayFunColorful => "birthday_fun_colorful",
            PresentationView::AnniversaryGoldenElegant => "anniversary_golden_elegant",
            PresentationView::BabyshowerSweetPink => "babyshower_sweet_pink",
            PresentationView::GraduationSuccessModern => "graduation_success_modern",
            PresentationView::RetirementGoldenClassic => "retirement_golden_classic",
            PresentationView::Generic => "generic",
        }
    }
}

/// Resolve the view for an event type and religious variant.
///
/// Hindu and muslim weddings get their dedicated views; every other
/// wedding variant (christian included) uses the elegant default. The
/// remaining event types each have a single default view.
pub fn resolve_view(event_type: &str, religious_type: &str) -> PresentationView {
    match (event_type, religious_type) {
        ("wedding", "hindu") => PresentationView::WeddingHinduTraditional,
        ("wedding", "muslim") => PresentationView::WeddingMuslimElegant,
        ("wedding", _) => PresentationView::WeddingElegant,
        ("birthday", _) => PresentationView::BirthdayFunColorful,
        ("anniversary", _) => PresentationView::AnniversaryGoldenElegant,
        ("babyshower", _) => PresentationView::BabyshowerSweetPink,
        ("graduation", _) => PresentationView::GraduationSuccessModern,
        ("retirement", _) => PresentationView::RetirementGoldenClassic,
        _ => PresentationView::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindu_and_muslim_weddings_get_dedicated_views() {
        assert_eq!(
            resolve_view("wedding", "hindu"),
            PresentationView::WeddingHinduTraditional
        );
        assert_eq!(
            resolve_view("wedding", "muslim"),
            PresentationView::WeddingMuslimElegant
        );
    }

    #[test]
    fn other_wedding_variants_use_the_elegant_default() {
        assert_eq!(
            resolve_view("wedding", "christian"),
            PresentationView::WeddingElegant
        );
        assert_eq!(
            resolve_view("wedding", "general"),
            PresentationView::WeddingElegant
        );
    }

    #[test]
    fn non_wedding_types_ignore_the_variant() {
        assert_eq!(
            resolve_view("birthday", "hindu"),
            PresentationView::BirthdayFunColorful
        );
        assert_eq!(
            resolve_view("retirement", "muslim"),
            PresentationView::RetirementGoldenClassic
        );
    }

    #[test]
    fn unknown_event_type_falls_back_to_generic() {
        assert_eq!(resolve_view("housewarming", "general"), PresentationView::Generic);
        assert_eq!(resolve_view("", ""), PresentationView::Generic);
    }

    #[test]
    fn keys_match_the_layout_names() {
        assert_eq!(
            resolve_view("graduation", "general").key(),
            "graduation_success_modern"
        );
        assert_eq!(
            resolve_view("babyshower", "general").key(),
            "babyshower_sweet_pink"
        );
    }
}
