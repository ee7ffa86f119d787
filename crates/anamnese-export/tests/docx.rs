use anamnese_export::docx::generate_docx;
use anamnese_export::styles::DocumentStyles;

#[test]
fn generates_a_zip_package() {
    let rendered = "# Clinical Record\n\n## Identification\n- **Name:** Maria\n\nPlain text\n---\n### Next page\n";
    let bytes = generate_docx(rendered, &DocumentStyles::default()).unwrap();

    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn unmatched_bold_marker_is_accepted() {
    let bytes = generate_docx("**open bold without close", &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn empty_input_still_produces_a_document() {
    let bytes = generate_docx("", &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
