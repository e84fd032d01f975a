use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let ps = load_polys(&args.polys, args.order.into())?;
    ensure!(!ps.is_empty(), "no polynomials given.");

    let mut sum = P::new(args.order.into());
    for p in ps.iter() { 
        sum = sum.try_add(p)?;
    }

    Ok(args.format.render(&sum))
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    #[arg(required = true)]
    pub polys: Vec<String>,

    #[arg(short, long, default_value = "asc")]
    pub order: Order,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
