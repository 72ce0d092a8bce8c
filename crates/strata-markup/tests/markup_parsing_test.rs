//! Integration tests for table and section extraction from filing markup

use strata_markup::{TableParser, index_order, normalize_tables, segment};

const FILING: &str = r#"<!DOCTYPE html>
<html>
<head><title>10-K</title><style>td { padding: 0 }</style></head>
<body>
<p style="font-weight:bold">PART I</p>
<p>ITEM 1. BUSINESS</p>
<p>Widget Corp designs widgets.</p>
<table>
  <tr><th>Segment</th><th>Revenue</th></tr>
  <tr><td>North&nbsp;America</td><td>$ 1,200</td></tr>
  <tr><td>Europe</td><td>
      <table><tr><td>restated</td></tr></table>
      $ 800</td></tr>
</table>
<p>ITEM 1A. RISK FACTORS</p>
<p>Demand for widgets is cyclical.</p>
<table><tr><td>single column</td></tr></table>
<div>Item 7. Management&#8217;s Discussion and Analysis</div>
<p>Revenue grew 12%.</p>
<TABLE><TR><TD>Q1<TD>Q2</TR><TR><TD>10<TD>12</TR></TABLE>
</body>
</html>"#;

#[test]
fn test_spec_example_table() {
    let html = "<table><tr><td>A</td><td>B</td></tr><tr><td>1</td><td>2</td></tr></table>";
    let tables = normalize_tables(TableParser::parse(html), 2, 200);

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows()[0].cells(), ["A", "B"]);
    assert_eq!(tables[0].rows()[1].cells(), ["1", "2"]);
}

#[test]
fn test_filing_tables() {
    let tables = normalize_tables(TableParser::parse(FILING), 2, 200);

    assert_eq!(tables.len(), 2);
    let segments = &tables[0];
    assert_eq!(segments.rows().len(), 3);
    assert_eq!(segments.rows()[1].cells(), ["North America", "$ 1,200"]);
    assert_eq!(segments.rows()[2].cells(), ["Europe", "restated $ 800"]);

    let quarters = &tables[1];
    assert_eq!(quarters.rows()[0].cells(), ["Q1", "Q2"]);
    assert_eq!(quarters.rows()[1].cells(), ["10", "12"]);
}

#[test]
fn test_filing_sections() {
    let sections = segment(FILING);
    let ids: Vec<&str> = sections.iter().map(|s| s.item.as_str()).collect();
    assert_eq!(ids, ["1", "1A", "7"]);

    assert_eq!(sections[0].title, "BUSINESS");
    assert!(sections[0].content.starts_with("Widget Corp designs widgets."));
    assert!(sections[0].content.contains("North America"));
    assert_eq!(sections[2].title, "Management\u{2019}s Discussion and Analysis");
    assert!(sections[2].content.starts_with("Revenue grew 12%."));
}

#[test]
fn test_index_order_is_stable() {
    let sections = segment("<p>Item 7. MD&amp;A</p><p>Item 1. Business</p><p>Item 1. Business</p>");
    let ordered: Vec<&str> = index_order(&sections).iter().map(|s| s.item.as_str()).collect();
    assert_eq!(ordered, ["1", "1", "7"]);
    assert_eq!(sections[0].title, "MD&A");
}
