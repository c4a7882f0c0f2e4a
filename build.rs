// SPDX-License-Identifier: MPL-2.0
//! Windows resource embedding.
//!
//! Compiles the application icon into the executable so the taskbar and
//! file explorer show it. The icon file is optional; source checkouts
//! without branding assets still build.

fn main() {
    #[cfg(target_os = "windows")]
    {
        let icon = "assets/branding/iced_invoice.ico";
        if std::path::Path::new(icon).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(icon);
            res.compile().expect("Failed to compile Windows resources");
        }
    }
}
