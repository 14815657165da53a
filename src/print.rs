//! Console tabulation of a tip sheet.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::fixture::Fixture;
use crate::selection::TipPair;

pub fn tabulate_sheet(rows: &[(&Fixture, &TipPair)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            Col::new(Styles::default().with(MinWidth(16)).with(Left)),
            Col::new(Styles::default().with(MinWidth(14)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(14)).with(Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Kickoff".into(),
                "Match".into(),
                "League".into(),
                "Tip".into(),
                "Prob".into(),
                "Edge".into(),
                "Alt".into(),
            ],
        ));
    for (fixture, tips) in rows {
        let tip_cell = if tips.top.note.is_some() {
            format!("{} {} (low edge)", tips.top.market, tips.top.label)
        } else {
            format!("{} {}", tips.top.market, tips.top.label)
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                fixture.kickoff.clone().unwrap_or_default().into(),
                format!("{} vs {}", fixture.home, fixture.away).into(),
                fixture.league.clone().into(),
                tip_cell.into(),
                format!("{:.3}", tips.top.probability).into(),
                format!("{:+.3}", tips.top.edge).into(),
                format!("{} {}", tips.second.market, tips.second.label).into(),
            ],
        ));
    }
    table
}
