use veneer::components::{ThemeContext, ThemeProvider};
use veneer::markup::div;
use veneer::theme::ThemeSource;

fn main() {
    // Hosts build the stylesheets once at startup and inject them into
    // their global styles.
    let sheets = veneer::init(&ThemeSource::BUILTIN).unwrap();

    println!("/* font styles */{}\n", sheets.font_styles);
    println!("/* theme styles */\n{}\n", sheets.theme_styles);

    // The outermost provider renders its children untouched; a nested one
    // wraps them so `[data-theme='light']` rules apply to that subtree.
    let root = ThemeProvider::new()
        .theme("dark")
        .toggle(|| println!("toggle requested"))
        .child(div().class("app").child("main content"))
        .render(&ThemeContext::empty());

    let aside = ThemeProvider::new()
        .theme("light")
        .class_name("aside")
        .child(div().child("scoped content"))
        .render(root.context());

    println!("{}", root.to_html());
    println!("{}", aside.to_html());
}
