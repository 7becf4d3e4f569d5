//! Entry point: parse flags, then keep a camera sized to the window.

use anyhow::Result;
use corelib::sizes::{FixedSizes, parse_chrome_entry};
use platform::{ChromeLayout, SizingMode, ViewportConfig};

fn parse_window_size<I: IntoIterator<Item = String>>(args: I) -> (u32, u32) {
    let mut w: Option<u32> = None;
    let mut h: Option<u32> = None;

    for arg in args {
        if let Some(v) = arg.strip_prefix("--size=") {
            if let Some((sw, sh)) = v.split_once('x').or_else(|| v.split_once('X'))
                && let (Ok(pw), Ok(ph)) = (sw.parse::<u32>(), sh.parse::<u32>())
            {
                w = Some(pw);
                h = Some(ph);
            } else {
                log::warn!("Invalid --size '{v}', expected WIDTHxHEIGHT in whole pixels");
            }
        } else if let Some(v) = arg.strip_prefix("--width=") {
            if let Ok(pw) = v.parse::<u32>() {
                w = Some(pw);
            }
        } else if let Some(v) = arg.strip_prefix("--height=") {
            if let Ok(ph) = v.parse::<u32>() {
                h = Some(ph);
            }
        }
    }

    (w.unwrap_or(1280).max(1), h.unwrap_or(720).max(1))
}

/// `--fixed=WxH` switches to fixed sizes; `--chrome=SELECTOR:HEIGHT` registers a
/// chrome bar and subtracts it from the window height.
fn parse_sizing<I: IntoIterator<Item = String>>(args: I) -> (SizingMode, ChromeLayout) {
    let mut fixed: Option<FixedSizes> = None;
    let mut chrome = ChromeLayout::new();
    let mut selector: Option<String> = None;

    for arg in args {
        if let Some(v) = arg.strip_prefix("--fixed=") {
            match v.parse::<FixedSizes>() {
                Ok(size) => fixed = Some(size),
                Err(e) => log::warn!("{e}; falling back to window sizing"),
            }
        } else if let Some(v) = arg.strip_prefix("--chrome=") {
            match parse_chrome_entry(v) {
                Ok((name, height)) => {
                    chrome.register(name.clone(), height);
                    selector = Some(name);
                }
                Err(e) => log::warn!("{e}; ignoring"),
            }
        }
    }

    let mode = match fixed {
        Some(size) => SizingMode::Fixed(size),
        None => SizingMode::Window {
            chrome_selector: selector,
        },
    };
    (mode, chrome)
}

fn config_from_args<I: IntoIterator<Item = String> + Clone>(args: I) -> ViewportConfig {
    let window_size = parse_window_size(args.clone());
    let (sizing, chrome) = parse_sizing(args);
    ViewportConfig {
        window_size,
        sizing,
        chrome,
        ..ViewportConfig::default()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = config_from_args(args);
    log::info!(
        "Starting sizekit. window_size={}x{}, sizing={:?}",
        config.window_size.0,
        config.window_size.1,
        config.sizing
    );

    platform::run_viewport(config)?;

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let config = config_from_args(args(&[]));
        assert_eq!(config.window_size, (1280, 720));
        assert_eq!(config.sizing, SizingMode::default());
        assert!(config.chrome.is_empty());
    }

    #[test]
    fn window_size_flags() {
        assert_eq!(parse_window_size(args(&["--size=800x600"])), (800, 600));
        assert_eq!(parse_window_size(args(&["--width=640"])), (640, 720));
        assert_eq!(parse_window_size(args(&["--size=oops", "--height=0"])), (1280, 1));
        assert_eq!(parse_window_size(args(&["--size=1920X1080"])), (1920, 1080));
    }

    #[test]
    fn window_size_rejects_fractional_and_out_of_range() {
        assert_eq!(parse_window_size(args(&["--size=800.7x600"])), (1280, 720));
        assert_eq!(parse_window_size(args(&["--size=1e10x5"])), (1280, 720));
        assert_eq!(parse_window_size(args(&["--size=-5x600"])), (1280, 720));
        assert_eq!(parse_window_size(args(&["--size=5000000000x600"])), (1280, 720));
    }

    #[test]
    fn chrome_flag_selects_and_registers() {
        let config = config_from_args(args(&["--chrome=.menu:64"]));
        assert_eq!(
            config.sizing,
            SizingMode::Window {
                chrome_selector: Some(".menu".into())
            }
        );
        assert_eq!(config.chrome.height_of(".menu"), Some(64.0));
    }

    #[test]
    fn fixed_flag_wins_over_window_sizing() {
        let config = config_from_args(args(&["--chrome=.menu:64", "--fixed=320x240"]));
        assert_eq!(config.sizing, SizingMode::Fixed(FixedSizes::new(320.0, 240.0)));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from_args(args(&["--fixed=wide", "--chrome=menu"]));
        assert_eq!(config.sizing, SizingMode::default());
        assert!(config.chrome.is_empty());
    }
}
