use std::fmt::Display;
use itertools::Itertools;
use crate::Deg;

pub fn superscript(d: Deg) -> String { 
    d.to_string().chars().map(|c| match c { 
        '1' => '\u{00B9}',
        '2' => '\u{00B2}',
        '3' => '\u{00B3}',
        _ => { 
            let k = c.to_digit(10).unwrap_or(0);
            char::from_u32(('\u{2070}' as u32) + k).unwrap_or(c)
        }
    }).collect()
}

// x^d without coefficient; "1" for d = 0.
pub fn fmt_mono(x: char, d: Deg, unicode: bool) -> String { 
    if d == 0 { 
        "1".to_string()
    } else if d == 1 { 
        x.to_string()
    } else if unicode {
        let e = superscript(d); 
        format!("{x}{e}")
    } else { 
        format!("{x}^{d}")
    }
}

// joins signed terms: ["4x²", "-5x", "1"] -> "4x² - 5x + 1". 
pub fn join_terms<I>(terms: I) -> String
where I: IntoIterator<Item = String> { 
    let mut res = String::new();

    for (k, s) in terms.into_iter().enumerate() { 
        if k == 0 { 
            res += &s;
        } else if let Some(s) = s.strip_prefix('-') { 
            res += " - ";
            res += s;
        } else { 
            res += " + ";
            res += &s;
        }
    }

    res
}

pub fn table<S, I, J, I1, I2, D, F>(head: S, rows: I1, cols: I2, entry: F) -> String
where 
    S: Display,
    I: Display,
    J: Display,
    I1: Iterator<Item = I>,
    I2: Iterator<Item = J>,
    D: Display,
    F: Fn(&I, &J) -> D
{
    use prettytable::*;

    let rows = rows.collect_vec();
    let cols = cols.collect_vec();

    fn row<I>(head: String, cols: I) -> Row
    where I: Iterator<Item = String> { 
        let mut cells = vec![Cell::new(head.as_str())];
        cells.extend(cols.map(|str| Cell::new(str.as_str())));
        Row::new(cells)
    }

    let mut table = Table::new();

    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row(
        head.to_string(),
        cols.iter().map(|j| j.to_string() )
    ));

    for i in rows.iter() { 
        table.add_row(row(
            i.to_string(),
            cols.iter().map(|j| format!("{}", entry(i, j)))
        ));
    }

    table.to_string()
}
