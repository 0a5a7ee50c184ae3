use projdoc::{
    Config, DocRequest, SectionBody, UploadItem, assemble, build_sections, run_projdoc,
};
use std::path::PathBuf;
use tempfile::tempdir;
use tokio::fs;

/// Creates a basic Config for testing.
fn test_config(output_path: PathBuf, paths: Vec<PathBuf>) -> Config {
    Config {
        output_path,
        title: "Test Project".to_string(),
        author: "Tester".to_string(),
        notes: None,
        paths,
        fail_fast: true,
        verbosity: 0,
    }
}

/// A minimal valid 1x1 24-bit BMP (no CRCs, easy to keep correct by hand).
fn tiny_bmp() -> Vec<u8> {
    vec![
        0x42, 0x4D, 0x3A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x36, 0x00, 0x00, 0x00,
        0x28, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00,
        0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x13, 0x0B, 0x00, 0x00,
        0x13, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xFF, 0x00,
    ]
}

#[tokio::test]
async fn it_generates_pdf_output() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root_path = temp_dir.path().to_path_buf();
    let src_file_path = root_path.join("example.py");

    std::fs::write(&src_file_path, "import os\ndef f(): pass\n")?;

    let output_path = root_path.join("output.pdf");
    let config = test_config(output_path.clone(), vec![src_file_path]);

    run_projdoc(config).await?;

    let contents = fs::read(&output_path).await?;

    // Should be a non-trivial PDF
    assert_eq!(&contents[0..4], b"%PDF", "PDF file missing magic header");
    assert!(contents.len() > 100, "Output PDF is too small");

    Ok(())
}

#[tokio::test]
async fn it_collects_directories_and_embeds_images() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root_path = temp_dir.path().to_path_buf();

    let input_dir = root_path.join("uploads");
    std::fs::create_dir_all(&input_dir)?;
    std::fs::write(input_dir.join("app.py"), "import os\n")?;
    std::fs::write(input_dir.join("query.sql"), "SELECT * FROM users;\n")?;
    std::fs::write(input_dir.join("screenshot.bmp"), tiny_bmp())?;
    std::fs::write(input_dir.join(".hidden"), "secret")?;

    let output_path = root_path.join("docs.pdf");
    let mut config = test_config(output_path.clone(), vec![input_dir]);
    config.notes = Some("hello".to_string());

    run_projdoc(config).await?;

    let contents = fs::read(&output_path).await?;
    assert_eq!(&contents[0..4], b"%PDF");

    Ok(())
}

#[test]
fn it_produces_one_section_per_item() {
    let items = vec![
        UploadItem::new("app.py", b"import os\ndef f(): pass".to_vec()),
        UploadItem::new("query.sql", b"SELECT 1;".to_vec()),
        UploadItem::new("broken.ipynb", b"{definitely not a notebook".to_vec()),
        UploadItem::new("report.xlsx", vec![0x00, 0x01, 0xFF, 0xFE]),
        UploadItem::new("shot.png", tiny_bmp()),
    ];

    let sections = build_sections(&items);
    assert_eq!(sections.len(), items.len());
}

#[test]
fn it_orders_sections_by_input() {
    let items = vec![
        UploadItem::new("main.py", b"import os\ndef f(): pass".to_vec()),
        UploadItem::new("screenshot.bmp", tiny_bmp()),
    ];

    let sections = build_sections(&items);
    assert_eq!(sections[0].heading, "Source Code File: main.py");
    assert_eq!(sections[1].heading, "Screenshot: screenshot.bmp");
    assert!(matches!(sections[1].body, SectionBody::Image(_)));
}

#[test]
fn it_survives_malformed_notebooks() {
    let request = DocRequest {
        title: "Broken Notebook".to_string(),
        author: "Tester".to_string(),
        notes: None,
        items: vec![UploadItem::new("broken.ipynb", b"not json at all".to_vec())],
    };

    // The bad notebook degrades to a placeholder section, generation completes
    let pdf = assemble(&request).unwrap();
    assert_eq!(&pdf[0..4], b"%PDF");
}

#[test]
fn it_assembles_code_image_and_notes() {
    let request = DocRequest {
        title: "End to End".to_string(),
        author: "Tester".to_string(),
        notes: Some("hello".to_string()),
        items: vec![
            UploadItem::new("main.py", b"import os\ndef f(): pass".to_vec()),
            UploadItem::new("screenshot.bmp", tiny_bmp()),
        ],
    };

    let sections = build_sections(&request.items);
    assert_eq!(sections.len(), 2);

    let pdf = assemble(&request).unwrap();
    assert_eq!(&pdf[0..4], b"%PDF");
    assert!(pdf.len() > 100);
}

#[test]
fn it_handles_an_empty_item_list() {
    let request = DocRequest {
        title: "Nothing Uploaded".to_string(),
        author: "Tester".to_string(),
        notes: None,
        items: Vec::new(),
    };

    let pdf = assemble(&request).unwrap();
    assert_eq!(&pdf[0..4], b"%PDF");
}

#[test]
fn it_produces_stable_output_size() {
    let request = DocRequest {
        title: "Stable".to_string(),
        author: "Tester".to_string(),
        notes: Some("same notes".to_string()),
        items: vec![
            UploadItem::new("a.py", b"import os".to_vec()),
            UploadItem::new("b.sql", b"SELECT 1;".to_vec()),
        ],
    };

    // Identical requests produce identical section data; the serialized
    // buffers differ only in the embedded creation timestamp
    let first = build_sections(&request.items);
    let second = build_sections(&request.items);
    assert_eq!(first, second);

    let a = assemble(&request).unwrap();
    let b = assemble(&request).unwrap();
    assert_eq!(a.len(), b.len());
}

#[test]
fn it_skips_notes_section_for_blank_notes() {
    let with_blank = DocRequest {
        title: "Notes".to_string(),
        author: "Tester".to_string(),
        notes: Some("   ".to_string()),
        items: Vec::new(),
    };
    let without = DocRequest {
        notes: None,
        ..with_blank.clone()
    };

    // Whitespace-only notes add no section, so the outputs match in size
    let a = assemble(&with_blank).unwrap();
    let b = assemble(&without).unwrap();
    assert_eq!(a.len(), b.len());
}
