//! Fake yt-dlp executables and their canned output

use std::path::{Path, PathBuf};

/// Title the fake engine substitutes for `%(title)s`
pub const FAKE_TITLE: &str = "Fake Title";

/// Info dump printed for `--dump-json`
pub const FAKE_INFO_JSON: &str = r#"{"title":"Fake Title","uploader":"Fake Uploader","duration":42,"thumbnail":"https://img.example/t.jpg","formats":[{"format_id":"18","format":"18 - 640x360"},{"format_id":"22","format":"22 - 1280x720"}]}"#;

/// URL fragment that makes the fake engine fail with exit code 1
pub const FAIL_MARKER: &str = "unavailable";

/// URL fragment that makes the fake engine report a file it never writes
pub const GHOST_MARKER: &str = "ghost";

/// Shell script standing in for yt-dlp
///
/// - `--dump-json <url>` prints [`FAKE_INFO_JSON`]
/// - `<url> -o <template> ...` expands `%(title)s` and `%(ext)s`, creates
///   the file and prints progress noise followed by the JSON record
/// - `-x` switches the extension to m4a, `--audio-format` overrides it
const FAKE_ENGINE: &str = r#"#!/bin/sh
if [ "$1" = "--dump-json" ]; then
    case "$2" in
        *unavailable*) echo "ERROR: [youtube] gone: Video unavailable" >&2; exit 1 ;;
    esac
    printf '%s\n' $FAKE_INFO_JSON
    exit 0
fi

url="$1"
template="$3"
case "$url" in
    *unavailable*) echo "ERROR: [youtube] gone: Video unavailable" >&2; exit 1 ;;
esac

ext=mp4
acodec=mp4a.40.2
prev=""
for arg in "$@"; do
    [ "$arg" = "-x" ] && ext=m4a && acodec=aac
    [ "$prev" = "--audio-format" ] && ext="$arg"
    [ "$prev" = "--merge-output-format" ] && ext="$arg"
    prev="$arg"
done

file=$(printf '%s' "$template" | sed -e "s/%(title)s/Fake Title/" -e "s/%(ext)s/$ext/")

echo "[youtube] fake: Downloading webpage"
echo "[download] Destination: $file"
case "$url" in
    *ghost*) ;;
    *) : > "$file" ;;
esac
echo "[download] 100% of 1.00KiB in 00:00"
echo "WARNING: fake engine" >&2
printf '{"_filename":"%s","ext":"%s","acodec":"%s","title":"Fake Title"}\n' "$file" "$ext" "$acodec"
"#;

/// Write the fake engine into `dir` and make it executable
pub fn install_fake_engine(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = FAKE_ENGINE.replace("$FAKE_INFO_JSON", &format!("'{FAKE_INFO_JSON}'"));
    let path = dir.join("yt-dlp");
    std::fs::write(&path, script).expect("write fake engine");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake engine");
    path
}
