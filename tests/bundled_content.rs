//! The dictionary shipped in `assets/` must drive every part of the page.

use std::path::Path;

use carousel::contact::{ContactForm, FormStatus};
use carousel::i18n::{Binding, Dictionary};
use carousel::sections::Sections;
use carousel::slider::SliderController;
use carousel::state::SliderState;

fn bundled() -> Dictionary {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/translations.json");
    Dictionary::load(&path).unwrap()
}

#[test]
fn every_language_has_testimonials_and_sections() {
    let dict = bundled();
    assert_eq!(dict.languages(), vec!["en", "id"]);

    for lang in dict.languages() {
        let mut slider = SliderController::default();
        slider.render(dict.testimonials(lang));
        assert_eq!(slider.state(), SliderState::Idle(0));
        assert_eq!(slider.len(), 4);

        let sections = Sections::from_dictionary(&dict, lang);
        assert_eq!(sections.products.len(), 2);
        assert_eq!(sections.why.len(), 2);
        assert_eq!(sections.process.len(), 3);
        assert!(sections.process[2].title.starts_with("3. "));
    }
}

#[test]
fn page_bindings_resolve_in_both_languages() {
    let dict = bundled();
    let mut bindings = vec![
        Binding::text("nav.home"),
        Binding::placeholder("contact.name"),
        Binding::placeholder("contact.email"),
    ];

    assert_eq!(dict.localize("en", &mut bindings), 3);
    assert_eq!(bindings[0].value.as_deref(), Some("Home"));

    assert_eq!(dict.localize("id", &mut bindings), 3);
    assert_eq!(bindings[1].value.as_deref(), Some("Nama Anda"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(Dictionary::load(Path::new("does/not/exist.json")).is_err());
}

#[test]
fn form_status_uses_active_language() {
    let dict = bundled();
    let lang = dict.resolve_language(Some("xx"));
    let mut form = ContactForm::new("", "", "");
    assert_eq!(form.submit().message(lang), "Nama & email wajib diisi.");
    assert_eq!(FormStatus::Sent.message("en"), "Thanks! Your message has been sent (demo).");
}
