use std::io::BufRead;
use itertools::Itertools;
use univ::io::TermReader;
use univ::DegOrder;
use crate::app::err::*;
use super::{Int, P};

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

// reads every polynomial from `r` until the input is exhausted.
pub fn read_polys<B>(r: B, order: DegOrder) -> Result<Vec<P>, Box<dyn std::error::Error>>
where B: BufRead { 
    let mut reader = TermReader::from_reader(r)?;
    let mut res = vec![];

    while !reader.is_at_end() { 
        res.push(reader.read_poly_with(order)?);
    }

    Ok(res)
}

// `-` reads from stdin, anything else is parsed as "N c_1 d_1 ... c_N d_N".
pub fn load_polys(inputs: &[String], order: DegOrder) -> Result<Vec<P>, Box<dyn std::error::Error>> { 
    let mut res = vec![];

    for input in inputs { 
        if input == "-" { 
            let stdin = std::io::stdin();
            res.extend(read_polys(stdin.lock(), order)?);
        } else { 
            let mut reader = TermReader::new(input);
            let p = reader.read_poly_with(order)?;
            reader.finish()?;
            res.push(p);
        }
    }

    Ok(res)
}

pub fn load_poly(input: &String, order: DegOrder) -> Result<P, Box<dyn std::error::Error>> { 
    let mut ps = load_polys(std::slice::from_ref(input), order)?;
    ensure!(ps.len() == 1, "expected one polynomial, got {}.", ps.len());
    Ok(ps.remove(0))
}

#[derive(Clone, PartialEq, Debug)]
pub enum Points { 
    Int(Vec<Int>),
    Real(Vec<f64>)
}

// "a..b" (inclusive) or a comma separated list.
pub fn parse_points(s: &str) -> Result<Points, Box<dyn std::error::Error>> { 
    let r = regex::Regex::new(r"^\s*(-?\d+)\s*\.\.\s*(-?\d+)\s*$")?;
    if let Some(m) = r.captures(s) { 
        let (a, b): (Int, Int) = (m[1].parse()?, m[2].parse()?);
        ensure!(a <= b, "empty range: '{s}'.");
        return Ok(Points::Int((a ..= b).collect()))
    }

    let items = s.split(',').map(|x| x.trim()).collect_vec();
    ensure!(items.iter().all(|x| !x.is_empty()), "invalid points: '{s}'.");

    if let Ok(xs) = items.iter().map(|x| x.parse::<Int>()).collect::<Result<Vec<_>, _>>() { 
        return Ok(Points::Int(xs))
    }

    if let Ok(xs) = items.iter().map(|x| x.parse::<f64>()).collect::<Result<Vec<_>, _>>() { 
        return Ok(Points::Real(xs))
    }

    err!("cannot parse '{s}' as points.")
}
