//! CLIテスト
//!
//! ビルド済みの `treebank-tokenize` バイナリを実行し、入出力を検証する。

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Write;
    use std::process::{Command, Output, Stdio};
    use tempfile::NamedTempFile;

    /// バイナリを実行して出力を返すヘルパー関数
    fn run(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_treebank-tokenize"))
            .args(args)
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run treebank-tokenize")
    }

    /// テスト用の入力ファイルを作成するヘルパー関数
    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        fs::write(temp_file.path(), content).expect("Failed to write temp file");
        temp_file
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    #[test]
    fn test_tokenize_text_one_per_line() {
        let output = run(&["tokenize", "--text", "He arrived at 3:00 pm."]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "He\narrived\nat\n3:00\npm\n.\n");
    }

    #[test]
    fn test_tokenize_space_format() {
        let output = run(&["tokenize", "--format", "space", "--text", "I cannot go!"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "I can not go !\n");
    }

    #[test]
    fn test_tokenize_json_format() {
        let output = run(&["tokenize", "-f", "json", "-t", "\"Hi,\" she said."]);
        assert!(output.status.success());
        let tokens: Vec<String> = serde_json::from_str(stdout(&output).trim()).unwrap();
        assert_eq!(tokens, vec!["``", "Hi", ",", "''", "she", "said", "."]);
    }

    #[test]
    fn test_tokenize_file() {
        let file = create_test_file(b"There were 300,000, but that wasn't enough.\n");
        let path = file.path().to_str().unwrap();
        let output = run(&["tokenize", "--format", "space", path]);
        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "There were 300,000 , but that was n't enough .\n"
        );
    }

    #[test]
    fn test_tokenize_stdin() {
        let mut child = Command::new(env!("CARGO_BIN_EXE_treebank-tokenize"))
            .args(["tokenize", "--format", "space"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .expect("Failed to spawn treebank-tokenize");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(b"Wait... what?")
            .unwrap();
        let output = child.wait_with_output().unwrap();
        assert!(output.status.success());
        assert_eq!(stdout(&output), "Wait ... what ?\n");
    }

    #[test]
    fn test_invalid_utf8_file_fails() {
        let file = create_test_file(b"bad \xff input");
        let output = run(&["tokenize", file.path().to_str().unwrap()]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("UTF-8"), "stderr: {}", stderr);
    }

    #[test]
    fn test_missing_file_fails() {
        let output = run(&["tokenize", "/definitely/not/here.txt"]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read input file"), "stderr: {}", stderr);
    }

    #[test]
    fn test_text_and_input_conflict() {
        let output = run(&["tokenize", "--text", "hi", "some-file.txt"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_verbose_enables_debug_log() {
        let output = Command::new(env!("CARGO_BIN_EXE_treebank-tokenize"))
            .args(["--verbose", "tokenize", "--text", "Hi there."])
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run treebank-tokenize");
        assert!(output.status.success());
        assert_eq!(stdout(&output), "Hi\nthere\n.\n");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("tokenized"), "stderr: {}", stderr);
    }

    #[test]
    fn test_quiet_by_default() {
        let output = Command::new(env!("CARGO_BIN_EXE_treebank-tokenize"))
            .args(["tokenize", "--text", "Hi there."])
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run treebank-tokenize");
        assert!(output.status.success());
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_trace_json() {
        let output = run(&["trace", "--json", "--text", "it's"]);
        assert!(output.status.success());
        let steps: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        let steps = steps.as_array().unwrap();
        assert_eq!(steps.len(), 17);
        assert_eq!(steps[11]["rule"], "pad");
        assert_eq!(steps[11]["buffer"], " it's ");
        assert_eq!(steps[14]["rule"], "contractions");
        assert_eq!(steps[14]["changed"], true);
        assert_eq!(steps[16]["buffer"], " it 's ");
    }

    #[test]
    fn test_rules_lists_cascade_in_order() {
        let output = run(&["rules"]);
        assert!(output.status.success());
        let text = stdout(&output);
        let names: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().nth(1))
            .collect();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "quote_at_start");
        assert_eq!(names[11], "pad");
        assert_eq!(names[16], "cannot");
    }
}
