use drivemap_core::MatchKind;
use drivemap_core::classify;
use drivemap_core::convert_path;
use drivemap_core::extract_windows_paths;
use drivemap_core::is_windows_path;
use pretty_assertions::assert_eq;

const PROSE_WITHOUT_DRIVES: &[&str] = &[
    "",
    "plain text",
    "ratio 16:9 and time 12:30",
    "unix paths like /usr/local/bin and ./relative",
    "https://example.com/path?q=1",
    "这是一个普通的文本，没有Windows路径",
    "Note: remember: colons after words are not drives",
];

#[test]
fn prose_without_drive_colon_yields_no_paths() {
    for text in PROSE_WITHOUT_DRIVES {
        assert_eq!(extract_windows_paths(text), Vec::<String>::new(), "{text:?}");
    }
}

#[test]
fn every_extracted_path_satisfies_the_grammar() {
    let texts = [
        "参考：C:\\var ， 文档：C:\\tools",
        "我输入xxxxxxxxx之后来一个 C:\\tools\\nginx 这里的什么什么",
        "读取文件 D:/projects/app/config.json 的内容",
        "切换到 E:\\backup\\data 目录",
        "路径 C: 和 D:\\path\\to\\file 都需要转换",
        "C:\\Program Files\\MyApp\\bin\\app.exe",
        "多个路径：C:\\path1, D:\\path2, E:\\path3",
    ];
    for text in texts {
        for path in extract_windows_paths(text) {
            assert!(is_windows_path(&path), "{path:?} from {text:?}");
            assert!(text.contains(&path), "{path:?} is not a slice of {text:?}");
        }
    }
}

#[test]
fn conversion_is_idempotent() {
    for path in [
        r"C:\Users\x",
        "c:/Users/x",
        "D:",
        r"E:\",
        r"F:\a b\(c)\d-e_f.g",
        r"G:\trailing\",
    ] {
        let once = convert_path(path);
        assert!(!is_windows_path(&once), "{once:?}");
        assert_eq!(convert_path(&once), once);
    }
}

#[test]
fn drive_letter_case_does_not_change_the_mount_path() {
    assert_eq!(convert_path(r"C:\Users\x"), "/mnt/c/Users/x");
    assert_eq!(convert_path(r"c:\Users\x"), "/mnt/c/Users/x");
}

#[test]
fn bare_drive_mention() {
    let paths = extract_windows_paths("please check D: now");
    assert_eq!(paths, vec!["D:".to_string()]);
    assert_eq!(convert_path(&paths[0]), "/mnt/d");
}

#[test]
fn bare_drive_subsumed_by_full_path() {
    assert_eq!(
        extract_windows_paths(r"C:\Users\x and C:"),
        vec![r"C:\Users\x".to_string()]
    );
}

#[test]
fn subsumption_is_per_drive_letter() {
    // A forward-slash path still accounts for a later bare mention of the
    // same drive.
    let candidates = classify("C: first, then C:/data");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].original, "C:/data");
    assert_eq!(candidates[0].kind, MatchKind::FullPath);
}

#[test]
fn full_paths_come_before_bare_drives() {
    let kinds: Vec<MatchKind> = classify("D: and C:\\x and E:")
        .into_iter()
        .map(|candidate| candidate.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![MatchKind::FullPath, MatchKind::BareDrive, MatchKind::BareDrive]
    );
}
