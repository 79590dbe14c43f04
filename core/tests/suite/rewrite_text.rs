use drivemap_core::ConversionRecord;
use drivemap_core::TextRewriter;
use pretty_assertions::assert_eq;

fn record(original: &str, converted: &str) -> ConversionRecord {
    ConversionRecord {
        original: original.to_string(),
        converted: converted.to_string(),
    }
}

#[test]
fn multi_path_rewrite_touches_only_the_paths() {
    let (text, conversions) = TextRewriter::new(true)
        .rewrite(r"from C:\a to D:\b")
        .into_parts();
    assert_eq!(text, "from /mnt/c/a to /mnt/d/b");
    assert_eq!(
        conversions,
        vec![record(r"C:\a", "/mnt/c/a"), record(r"D:\b", "/mnt/d/b")]
    );
}

#[test]
fn environment_gate_returns_input_verbatim() {
    for text in [
        r"from C:\a to D:\b",
        "please check D: now",
        "",
        "参考：C:\\var ， 文档：C:\\tools",
    ] {
        let (rewritten, conversions) = TextRewriter::new(false).rewrite(text).into_parts();
        assert_eq!(rewritten, text);
        assert_eq!(conversions, Vec::new());
    }
}

#[test]
fn overlapping_prefixes_are_replaced_longest_first() {
    let text = r"logs in C:\app\logs, binaries in C:\app\logs\bin\x64";
    let rewrite = TextRewriter::new(true).rewrite(text);
    assert_eq!(
        rewrite.text,
        "logs in /mnt/c/app/logs, binaries in /mnt/c/app/logs/bin/x64"
    );
    assert_eq!(rewrite.conversions.len(), 2);
}

#[test]
fn rewrite_mixed_script_prose() {
    let rewrite = TextRewriter::new(true).rewrite("路径 C: 和 D:\\path\\to\\file 都需要转换");
    assert_eq!(rewrite.text, "路径 /mnt/c 和 /mnt/d/path/to/file 都需要转换");
    assert_eq!(
        rewrite.conversions,
        vec![
            record(r"D:\path\to\file", "/mnt/d/path/to/file"),
            record("C:", "/mnt/c"),
        ]
    );
}

#[test]
fn rewriting_the_output_again_changes_nothing() {
    let rewriter = TextRewriter::new(true);
    let first = rewriter.rewrite(r"copy C:\Program Files\App\app.exe to E:\backup and D:");
    let second = rewriter.rewrite(&first.text);
    assert_eq!(second.text, first.text);
    assert!(second.conversions.is_empty());
}

#[test]
fn colon_after_a_path_is_left_alone() {
    let rewrite = TextRewriter::new(true).rewrite(r"Error in C:\temp\x: file not found");
    assert_eq!(rewrite.text, "Error in /mnt/c/temp/x: file not found");
    assert_eq!(
        rewrite.conversions,
        vec![record(r"C:\temp\x", "/mnt/c/temp/x")]
    );
}
