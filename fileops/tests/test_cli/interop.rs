use crate::add_test;
use crate::common::{generate_random_data, Fixture, SAMPLE_TEXT};

// System gzip can read what we compress
add_test!(system_gzip_reads_our_output, async {
    let data = generate_random_data(64 * 1024);
    let fixture = Fixture::with_file("random.bin", &data);

    let output = fixture.run_cargo(&["random.bin", "-c"]).await;
    assert!(output.status.success());

    let Some(output) = fixture.run_system("gzip", &["-t", "random.bin.gz"]).await else {
        return;
    };
    assert!(output.status.success());
});

// We can read what system gzip compresses
add_test!(we_read_system_gzip_output, async {
    let fixture = Fixture::with_file("notes.txt", SAMPLE_TEXT.as_bytes());

    let Some(output) = fixture.run_system("gzip", &["-k", "notes.txt"]).await else {
        return;
    };
    assert!(output.status.success());

    let output = fixture
        .run_cargo(&["notes.txt.gz", "-d", "-o", "restored.txt"])
        .await;
    assert!(output.status.success());
    fixture.assert_files(&["restored.txt"], &[SAMPLE_TEXT.as_bytes()]);
});
