use std::fs;
use std::path::Path;

/// Write the full built-in fixture tree, with every implemented heuristic
/// satisfied. page3.html, page4.html, and blog/post1.html have no heuristic
/// and always come back as warnings.
pub fn write_builtin_fixtures(root: &Path) {
    fs::write(
        root.join("page1.html"),
        r#"<html><body>
            <img src="photo.jpg">
            <div class="low-contrast">hard to read</div>
        </body></html>"#,
    )
    .unwrap();

    fs::write(
        root.join("page2.html"),
        r#"<form>
            <label for="name">Name</label>
            <input id="name">
            <input id="email">
            <input id="phone">
        </form>"#,
    )
    .unwrap();

    fs::write(root.join("page3.html"), "<html><body></body></html>").unwrap();
    fs::write(root.join("page4.html"), "<html><body></body></html>").unwrap();

    fs::write(
        root.join("demo-bad.html"),
        r#"<div id="duplicate">one</div>
        <div id="duplicate">two</div>
        <button></button>
        <img src="decorative.png" />"#,
    )
    .unwrap();

    fs::create_dir_all(root.join("auth")).unwrap();
    fs::write(
        root.join("auth/login.html"),
        r#"<form><input type="checkbox" id="remember"> Remember me</form>"#,
    )
    .unwrap();

    fs::create_dir_all(root.join("blog")).unwrap();
    fs::write(root.join("blog/post1.html"), "<html><body></body></html>").unwrap();
}
