//! Integration tests for the shapeshifter binary
//!
//! Each test writes a synthetic dump, runs a command, and decodes the result.

use shapeshifter::{Config, Layout, Wave, read_config, write_config};
use std::fs::{self, File};
use std::io::Cursor;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shapeshifter"))
        .args(args)
        .output()
        .expect("Failed to run shapeshifter")
}

/// Write a dump with bank 0 named TESTBNK0 and a marker byte outside the regions
fn write_test_dump(path: &Path) -> Config {
    let mut config = Config::blank();
    for i in 0..shapeshifter::NUM_BANKS {
        config.bank_mut(i).unwrap().name = *b"UNNAMED ";
    }
    config.bank_mut(0).unwrap().name = *b"TESTBNK0";
    let mut samples = [0i16; 512];
    samples[10] = i16::MAX;
    *config.bank_mut(2).unwrap().wave_mut(5).unwrap() = Wave::new(samples);

    let mut buffer = Cursor::new(Vec::new());
    write_config(&mut buffer, &config).unwrap();
    let mut bytes = buffer.into_inner();
    bytes[0] = 0x5A;
    fs::write(path, bytes).unwrap();
    config
}

fn read_dump(path: &Path) -> Config {
    read_config(File::open(path).unwrap()).unwrap()
}

#[test]
fn test_banks_lists_names() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    write_test_dump(&dump);

    let output = run_cli(&["banks", dump.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 128);
    assert_eq!(lines[0], "  0: TESTBNK0");
    assert_eq!(lines[127], "127: UNNAMED ");
}

#[test]
fn test_banks_fails_on_truncated_dump() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("short.bin");
    fs::write(&dump, vec![0u8; Layout::SHAPESHIFTER.waves_offset as usize]).unwrap();

    let output = run_cli(&["banks", dump.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_rename_in_place() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    let original = write_test_dump(&dump);

    let output = run_cli(&["rename", dump.to_str().unwrap(), "--bank", "7", "SAW"]);
    assert!(output.status.success());

    let edited = read_dump(&dump);
    assert_eq!(&edited.banks()[7].name, b"SAW     ");
    assert_eq!(edited.banks()[0], original.banks()[0]);
    assert_eq!(fs::read(&dump).unwrap()[0], 0x5A);
}

#[test]
fn test_rename_rejects_long_name() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    write_test_dump(&dump);
    let before = fs::read(&dump).unwrap();

    let output = run_cli(&["rename", dump.to_str().unwrap(), "-b", "1", "TOOLONGNAME"]);
    assert!(!output.status.success());
    assert_eq!(fs::read(&dump).unwrap(), before);
}

#[test]
fn test_import_to_new_file() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    let edited_path = dir.path().join("edited.bin");
    let wav = dir.path().join("ramp.wav");
    write_test_dump(&dump);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&wav, spec).unwrap();
    for i in 0..512i16 {
        writer.write_sample(i * 64).unwrap();
    }
    writer.finalize().unwrap();

    let output = run_cli(&[
        "import",
        dump.to_str().unwrap(),
        "--bank",
        "3",
        "--wave",
        "1",
        wav.to_str().unwrap(),
        "-o",
        edited_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let edited = read_dump(&edited_path);
    let wave = edited.wave(3, 1).unwrap();
    assert_eq!(wave.samples()[0], 0);
    assert_eq!(wave.samples()[511], 511 * 64);
    assert_eq!(&edited.banks()[0].name, b"TESTBNK0");
    assert_eq!(fs::read(&edited_path).unwrap()[0], 0x5A);

    // the source dump is left alone
    assert_eq!(read_dump(&dump).wave(3, 1), Some(&Wave::SILENT));
}

#[test]
fn test_render_writes_png() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    let png = dir.path().join("wave.png");
    write_test_dump(&dump);

    let output = run_cli(&[
        "render",
        dump.to_str().unwrap(),
        "--bank",
        "2",
        "--wave",
        "5",
        "-o",
        png.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(&fs::read(&png).unwrap()[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_render_rejects_bad_wave_index() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    let png = dir.path().join("wave.png");
    write_test_dump(&dump);

    let output = run_cli(&[
        "render",
        dump.to_str().unwrap(),
        "--bank",
        "0",
        "--wave",
        "8",
        "-o",
        png.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!png.exists());
}

#[test]
fn test_play_writes_tiled_wav() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    let wav = dir.path().join("preview.wav");
    write_test_dump(&dump);

    let output = run_cli(&[
        "play",
        dump.to_str().unwrap(),
        "--bank",
        "2",
        "--wave",
        "5",
        "--duration",
        "0.5",
        "--sample-rate",
        "8000",
        "-o",
        wav.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let mut reader = hound::WavReader::open(&wav).unwrap();
    assert_eq!(reader.spec().sample_rate, 8000);
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), 4000);
    assert_eq!(samples[10], i16::MAX);
    assert_eq!(samples[512 + 10], i16::MAX);
    assert_eq!(samples[11], 0);
}

#[test]
fn test_play_rejects_oversized_duration() {
    let dir = tempdir().unwrap();
    let dump = dir.path().join("dump.bin");
    let wav = dir.path().join("preview.wav");
    write_test_dump(&dump);

    let output = run_cli(&[
        "play",
        dump.to_str().unwrap(),
        "--bank",
        "0",
        "--wave",
        "0",
        "--duration",
        "1e15",
        "-o",
        wav.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
    assert!(!wav.exists());
}
