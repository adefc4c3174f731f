use serde::{Deserialize, Serialize};

use super::messages::{self, Language};

/// The emergency-call affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDisclosure {
    pub visible: bool,
    /// Dial target, `tel:<number>`.
    pub tel_href: String,
    pub label: String,
}

impl CallDisclosure {
    /// Hidden, pointing at the fallback number.
    pub fn hidden(fallback_number: &str, lang: Language) -> Self {
        Self::for_number(false, fallback_number, lang)
    }

    fn for_number(visible: bool, number: &str, lang: Language) -> Self {
        Self {
            visible,
            tel_href: format!("tel:{number}"),
            label: format!("{} {number}", messages::text(messages::CALL_LABEL, lang)),
        }
    }
}

/// Decide the call disclosure. Visibility follows `call_now` alone.
///
/// Shown: the service's number when it sent a non-blank one, otherwise the
/// fallback. Hidden: always reset to the fallback, so a later reveal never
/// dials a number left over from an earlier case.
pub fn call_disclosure(
    call_now: bool,
    call_tel: Option<&str>,
    fallback_number: &str,
    lang: Language,
) -> CallDisclosure {
    if !call_now {
        return CallDisclosure::hidden(fallback_number, lang);
    }

    let number = call_tel
        .map(str::trim)
        .filter(|tel| !tel.is_empty())
        .unwrap_or(fallback_number);
    CallDisclosure::for_number(true, number, lang)
}
