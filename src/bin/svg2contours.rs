extern crate svg_contours;
use std::env;
use std::fs;
use std::process;

fn read_or_exit(filename: &str) -> String {
    match fs::read_to_string(filename) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", filename, e);
            process::exit(1);
        },
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        eprintln!("Usage: {} <file.svg> [options.xml]", args[0]);
        process::exit(1);
    }
    let options = if args.len() == 3 {
        match svg_contours::Options::from_xml(&read_or_exit(&args[2])) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{}: {}", args[2], e);
                process::exit(1);
            },
        }
    } else {
        svg_contours::Options::default()
    };
    let svg = read_or_exit(&args[1]);
    match svg_contours::convert_svg_str(&svg, &options) {
        Ok(Some(contours)) => {
            for contour in contours {
                println!("{}", svg_contours::contours_to_path_data(&[contour]));
            }
        },
        Ok(None) => {},
        Err(e) => {
            eprintln!("{}: {}", args[1], e);
            process::exit(1);
        },
    }
}
