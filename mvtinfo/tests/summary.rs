use predicates::{prelude::*, str};
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utilities::*;

const SAMPLE_SUMMARY: &str = "layers: 2
water:
  version: 2
  extent: 4096
  features: 3
  keys: 0
  values: 0
  geometry summary:
    total: 16
    commands: 6
    move_to: 2
    line_to: 3
    close: 2
    degenerate polygons: 1
    empty geoms: 1
pois:
  version: 2
  extent: 4096
  features: 1
  keys: 1
  values: 1
  geometry summary:
    total: 3
    commands: 1
    move_to: 1
    line_to: 0
    close: 0
    degenerate polygons: 0
    empty geoms: 0
";

#[rstest]
#[case(sample_tile(), "appears not to be compressed")]
#[case(gzip(&sample_tile()), "gzip compressed")]
#[case(zlib(&sample_tile()), "zlib compressed")]
fn summary(#[case] data: Vec<u8>, #[case] message: &str) {
	let (_dir, path) = write_temp_tile(&data);
	let output = mvtinfo_cmd()
		.args(["summary", path.to_str().unwrap()])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	assert_eq!(
		String::from_utf8(output).unwrap(),
		format!("message: {message}\n{SAMPLE_SUMMARY}")
	);
}

#[test]
fn single_layer() {
	let (_dir, path) = write_temp_tile(&sample_tile());
	mvtinfo_cmd()
		.args(["summary", "--layer", "pois", path.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("layers: 1\npois:\n"))
		.stdout(str::contains("water:").not());
}

#[test]
fn unknown_layer() {
	let (_dir, path) = write_temp_tile(&sample_tile());
	mvtinfo_cmd()
		.args(["summary", "--layer", "buildings", path.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("layer 'buildings' not found"));
}

#[test]
fn unknown_command_aborts() {
	let (_dir, path) = write_temp_tile(&broken_tile());
	mvtinfo_cmd()
		.args(["summary", path.to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("failed to decode feature 1 of layer 'roads'"))
		.stderr(str::contains("unknown command id 3 at offset 3"));
}

#[test]
fn skip_invalid() {
	let (_dir, path) = write_temp_tile(&broken_tile());
	mvtinfo_cmd()
		.args(["summary", "--skip-invalid", path.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("    total: 6\n    commands: 2\n    move_to: 1\n    line_to: 1\n"))
		.stdout(str::contains("    skipped features: 1\n"))
		.stdout(str::contains(
			"    skipped: failed to decode feature 1 of layer 'roads': unknown command id 3 at offset 3\n",
		));
}

#[test]
fn broken_protobuf() {
	let (_dir, path) = write_temp_tile(&[0x1A, 0x10, 0x0A]);
	mvtinfo_cmd()
		.args(["summary", path.to_str().unwrap()])
		.assert()
		.failure()
		.stdout(str::is_empty())
		.stderr(str::contains("failed to parse protobuf"));
}
