//! Tests for `workers-preview comment`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_comment_image() {
    let t = Test::new();

    let output = t.comment(&[
        "image",
        "--building-log-url",
        "https://ci/log/1",
        "--image-url",
        "https://img/1.png",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "<a href=\"https://ci/log/1\"><img width=\"300\" src=\"https://img/1.png\"></a>\n"
    );
}

#[test]
fn test_comment_footer() {
    let t = Test::new();

    t.cmd()
        .args(["comment", "footer"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<sub>[cloudflare-workers-preview](https://github.com/shidil/cloudflare-workers-preview)</sub>\n",
        ));
}

#[test]
fn test_comment_image_requires_both_urls() {
    let t = Test::new();

    let output = t.comment(&["image", "--image-url", "https://img/1.png"]);
    assert_failure(&output);
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "comment", "footer"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).lines().count(), 1);
}
