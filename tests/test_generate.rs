use std::fs;

use badgegen::models::{Color, CompanyEntry};
use badgegen::registry::portfolio_companies;
use badgegen::render::{BADGE_SIZE, BadgeRenderer};
use badgegen::runner::run;

fn small_table() -> Vec<CompanyEntry> {
    vec![
        CompanyEntry::new("Cologix", "cologix.png", "#003B73"),
        CompanyEntry::new("Digital Edge", "digital-edge.png", "#00A3E0"),
        CompanyEntry::new("CoreSite (JV)", "coresite.png", "#003B73"),
    ]
}

#[test]
fn bootstrap_creates_directory_and_one_file_per_entry() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("logos");
    assert!(!out.exists());

    let entries = small_table();
    let summary = run(&entries, &out)?;

    assert_eq!(summary.created, entries.len());
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);
    assert!(out.is_dir());

    let files = fs::read_dir(&out)?.count();
    assert_eq!(files, entries.len());
    for entry in &entries {
        assert!(out.join(&entry.filename).is_file());
    }
    Ok(())
}

#[test]
fn second_run_skips_everything_and_changes_no_bytes() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("logos");
    let entries = small_table();

    let first = run(&entries, &out)?;
    assert_eq!(first.created, entries.len());

    let before: Vec<Vec<u8>> = entries
        .iter()
        .map(|e| fs::read(out.join(&e.filename)))
        .collect::<Result<_, _>>()?;

    let second = run(&entries, &out)?;
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, entries.len());
    assert_eq!(second.failed, 0);

    let after: Vec<Vec<u8>> = entries
        .iter()
        .map(|e| fs::read(out.join(&e.filename)))
        .collect::<Result<_, _>>()?;
    assert_eq!(before, after);
    assert_eq!(fs::read_dir(&out)?.count(), entries.len());
    Ok(())
}

#[test]
fn existing_files_are_never_overwritten() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("logos");
    fs::create_dir_all(&out)?;
    fs::write(out.join("cologix.png"), b"sentinel")?;

    let summary = run(&small_table(), &out)?;
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.created, 2);
    assert_eq!(fs::read(out.join("cologix.png"))?, b"sentinel");
    Ok(())
}

#[test]
fn full_registry_generates_every_logo() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("logos");
    let entries = portfolio_companies();

    let summary = run(&entries, &out)?;
    assert_eq!(summary.created, entries.len());
    assert_eq!(summary.failed, 0);
    assert_eq!(fs::read_dir(&out)?.count(), entries.len());
    Ok(())
}

#[test]
fn malformed_color_fails_that_entry_only() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("logos");
    let entries = vec![
        CompanyEntry::new("Broken Badge", "broken.png", "not-a-color"),
        CompanyEntry::new("Cologix", "cologix.png", "#003B73"),
    ];

    let summary = run(&entries, &out)?;
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.created, 1);
    assert!(!out.join("broken.png").exists());
    assert!(out.join("cologix.png").is_file());
    Ok(())
}

#[test]
fn color_parsing_requires_six_hex_digits() {
    assert!(Color::try_from("#00B34A").is_ok());
    // from_str_radix alone would accept a signed component
    assert!(Color::try_from("#+1B34A").is_err());
    assert!(Color::try_from("#00B34G").is_err());
    assert!(Color::try_from("00B34A").is_err());
    assert!(Color::try_from("#00B34").is_err());
}

#[test]
fn rendered_badge_has_expected_pixels() -> anyhow::Result<()> {
    let color = Color::try_from("#00B34A")?;
    let img = BadgeRenderer::new().render("KP", color);

    assert_eq!(img.width(), BADGE_SIZE);
    assert_eq!(img.height(), BADGE_SIZE);

    // Corners are outside the rounded rectangle and stay transparent
    let edge = BADGE_SIZE - 1;
    for (x, y) in [(0, 0), (edge, 0), (0, edge), (edge, edge)] {
        assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y}) not transparent");
    }

    // Just inside the left edge at mid-height the fill color is exact
    let p = img.get_pixel(10, BADGE_SIZE / 2);
    assert_eq!(p.0, [0x00, 0xB3, 0x4A, 0xFF]);

    // Some pixel in the central region carries the white initials
    let has_text = (32..96)
        .flat_map(|y| (24..104).map(move |x| (x, y)))
        .any(|(x, y)| {
            let p = img.get_pixel(x, y);
            p[0] >= 200 && p[1] >= 200 && p[2] >= 200 && p[3] == 255
        });
    assert!(has_text, "no white text pixels found");
    Ok(())
}

#[test]
fn saved_logo_is_a_readable_png() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("logos");
    run(&small_table(), &out)?;

    let img = image::open(out.join("digital-edge.png"))?.to_rgba8();
    assert_eq!((img.width(), img.height()), (BADGE_SIZE, BADGE_SIZE));
    assert_eq!(img.get_pixel(0, 0)[3], 0);
    Ok(())
}
