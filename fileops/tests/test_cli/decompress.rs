use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

// Decompression requires an explicit output path
add_test!(decompress_requires_output, async {
    let fixture = Fixture::with_file("notes.txt", SAMPLE_TEXT.as_bytes());
    fixture.run_cargo(&["notes.txt", "-c"]).await;

    let output = fixture.run_cargo(&["notes.txt.gz", "-d"]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        output.stderr,
        "Error: Output file name required for decompression\n"
    );
    assert!(!fixture.file_exists("notes.txt"));
});

// Decompression writes the original bytes to --output
add_test!(decompress_to_output, async {
    let fixture = Fixture::with_file("notes.txt", SAMPLE_TEXT.as_bytes());
    fixture.run_cargo(&["notes.txt", "-c"]).await;

    let output = fixture
        .run_cargo(&["notes.txt.gz", "--decompress", "--output", "copy.txt"])
        .await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        "File decompressed successfully and saved as copy.txt\n"
    );
    fixture.assert_files(&["copy.txt"], &[SAMPLE_TEXT.as_bytes()]);
});

// Non-gzip input is reported as a decompression failure
add_test!(decompress_invalid_input, async {
    let fixture = Fixture::with_file("plain.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo(&["plain.txt", "-d", "-o", "out.txt"])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.starts_with("Decompression failed: plain.txt: "));
    assert!(output.stderr.contains("not a valid gzip stream"));
    assert!(!fixture.file_exists("out.txt"));
});

// A missing --output for decompression does not stop later operations
add_test!(decompress_missing_output_continues, async {
    let fixture = Fixture::with_file("notes.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run_cargo(&["notes.txt", "-d", "-w"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Number of words in the file: 9\n");
    assert_eq!(
        output.stderr,
        "Error: Output file name required for decompression\n"
    );
});
