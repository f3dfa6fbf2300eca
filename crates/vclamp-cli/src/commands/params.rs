//! Parameter listing command.

#![allow(clippy::print_literal)]

use clap::Args;
use vclamp_core::{Clamp, ParameterInfo};

use super::common::load_preset;

#[derive(Args)]
pub struct ParamsArgs {
    /// Also show the values a preset sets
    #[arg(short, long)]
    preset: Option<String>,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let mut clamp = Clamp::new();
    if let Some(name) = &args.preset {
        load_preset(name)?.apply_to(&mut clamp)?;
    }

    println!("Clamp Parameters");
    println!("================");
    println!();
    println!(
        "  {:3}  {:12}  {:14}  {:22}  {:10}  {}",
        "#", "Name", "Id", "Range", "Default", "Value"
    );
    println!(
        "  {:3}  {:12}  {:14}  {:22}  {:10}  {}",
        "-", "----", "--", "-----", "-------", "-----"
    );

    for i in 0..clamp.param_count() {
        let Some(desc) = clamp.param_info(i) else {
            continue;
        };
        let range = if desc.is_stepped() {
            "Off/On".to_string()
        } else {
            format!("{} .. {}", desc.format_value(desc.min), desc.format_value(desc.max))
        };
        println!(
            "  {:3}  {:12}  {:14}  {:22}  {:10}  {}",
            i,
            desc.name,
            desc.string_id,
            range,
            desc.format_value(desc.default),
            desc.format_value(clamp.get_param(i)),
        );
    }

    println!();
    println!("Link is engaged when its switch reads Off (0).");
    println!("Values on the command line use display units, e.g.:");
    println!("  vclamp process in.wav out.wav --param max=5 --param gain=6dB --param snap1=on");

    Ok(())
}
