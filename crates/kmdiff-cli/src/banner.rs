//! Startup banner

pub const BANNER: &str = r" _                  _ _  __  __ 
| | ___ __ ___   __| (_)/ _|/ _|
| |/ / '_ ` _ \ / _` | | |_| |_ 
|   <| | | | | | (_| | |  _|  _|
|_|\_\_| |_| |_|\__,_|_|_| |_|  

kmdiff - Kubernetes Manifest Diff
";

/// Print the banner to stdout
pub fn print_banner() {
    println!("{}", BANNER);
}
