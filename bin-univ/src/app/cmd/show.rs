use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let p = load_poly(&args.poly, args.order.into())?;
    let mut lines = vec![args.format.render(&p)];

    if args.stats { 
        lines.push(format!("terms:  {}", p.nterms()));
        lines.push(format!("degree: {}", p.degree()));
        lines.push(format!("height: {}", p.height()));
        lines.push(format!("list:   {}", p.to_term_list()));
    }

    Ok(lines.join("\n"))
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub poly: String,

    #[arg(short, long, default_value = "asc")]
    pub order: Order,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(short, long)]
    pub stats: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
