//! Integration tests driving the command line through `run()`.

use gift_rank::Host;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        Cursor::new(&mut self.output_buf)
    }

    fn error(&mut self) -> impl std::io::Write {
        Cursor::new(&mut self.error_buf)
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

const GIFTS: &str = "\
character,gift,effect
Alice,Ring,大
Bob,Ring,大
Alice,Tea,中
Bob,Cake,特大
Alice,Cake,大
Carol,Stone,中
Carol,Bone,特大
Dave,Feather,unknown
";

const RARITY: &str = "\
giftname,rarity
Ring,1
Bone,1
Stone,0
";

fn write_data(dir: &Path) -> (String, String) {
    let gifts = dir.join("gifts.csv");
    let rarity = dir.join("rarity.csv");
    fs::write(&gifts, GIFTS).unwrap();
    fs::write(&rarity, RARITY).unwrap();
    (gifts.to_str().unwrap().to_string(), rarity.to_str().unwrap().to_string())
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_recommend_json() {
    let tmp = tempfile::tempdir().unwrap();
    let (gifts, rarity) = write_data(tmp.path());

    let mut host = TestHost::new();
    gift_rank::run(
        &mut host,
        ["gift-rank", "--gifts", gifts.as_str(), "--rarity", rarity.as_str(), "recommend", "Alice", "Bob", "--format", "json"],
    );

    assert_eq!(host.exit_code, None, "unexpected failure: {}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();

    assert_eq!(value["assignments"][0]["character"], "Alice");
    assert_eq!(value["assignments"][0]["unique"], serde_json::json!(["Tea"]));
    assert_eq!(value["assignments"][0]["shared"], serde_json::json!(["Ring"]));
    assert_eq!(value["assignments"][1]["unique"], serde_json::json!(["Cake"]));
    assert_eq!(value["shared"][0]["gift"], "Ring");
    assert_eq!(value["shared"][0]["competition"], 2);
    assert_eq!(value["generation_candidates"], serde_json::json!(["Cake"]));
    assert_eq!(value["useless"]["common"], serde_json::json!(["Feather", "Stone"]));
    assert_eq!(value["useless"]["rare"], serde_json::json!(["Bone"]));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_recommend_console() {
    let tmp = tempfile::tempdir().unwrap();
    let (gifts, rarity) = write_data(tmp.path());

    let mut host = TestHost::new();
    gift_rank::run(
        &mut host,
        ["gift-rank", "--gifts", gifts.as_str(), "--rarity", rarity.as_str(), "recommend", "Carol", "--color", "never"],
    );

    assert_eq!(host.exit_code, None, "unexpected failure: {}", host.error_str());
    let text = host.output_str();
    assert!(text.contains("Carol  unique: Bone*, Stone"), "got: {text}");
    assert!(text.contains("Useless rare gifts\n  Ring*"), "got: {text}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_characters() {
    let tmp = tempfile::tempdir().unwrap();
    let (gifts, rarity) = write_data(tmp.path());

    let mut host = TestHost::new();
    gift_rank::run(&mut host, ["gift-rank", "characters", "--gifts", gifts.as_str(), "--rarity", rarity.as_str()]);

    assert_eq!(host.exit_code, None, "unexpected failure: {}", host.error_str());
    assert_eq!(host.output_str(), "Alice\nBob\nCarol\nDave\n");
}

#[test]
fn test_recommend_without_characters_fails() {
    let mut host = TestHost::new();
    gift_rank::run(&mut host, ["gift-rank", "recommend"]);

    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("no characters selected"), "got: {}", host.error_str());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_missing_data_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let gifts = tmp.path().join("missing.csv");

    let mut host = TestHost::new();
    gift_rank::run(&mut host, ["gift-rank", "--gifts", gifts.to_str().unwrap(), "recommend", "Alice"]);

    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("data file not found"), "got: {}", host.error_str());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_init_writes_config_once() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("gift-rank.toml");
    let path_str = path.to_str().unwrap();

    let mut host = TestHost::new();
    gift_rank::run(&mut host, ["gift-rank", "init", "--output", path_str]);
    assert_eq!(host.exit_code, None, "unexpected failure: {}", host.error_str());
    assert!(fs::read_to_string(&path).unwrap().contains("gifts_file"));

    let mut host = TestHost::new();
    gift_rank::run(&mut host, ["gift-rank", "init", "--output", path_str]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("already exists"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut host = TestHost::new();
    gift_rank::run(&mut host, ["gift-rank", "frobnicate"]);
    assert_eq!(host.exit_code, Some(2));
}
