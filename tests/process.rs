use tiny_csv::{from_comma_separated_str, from_tab_separated_str, Error};

fn record(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

#[test]
fn comma_separated() {
    let records = from_comma_separated_str("a,b\n'c,d',e\r\n", None).unwrap();
    assert_eq!(
        records,
        vec![record(&["a", "b"]), record(&["c,d", "e"]), record(&[""])]
    );
}

#[test]
fn tab_separated() {
    let records = from_tab_separated_str("a\tb,c\r\"d\te\"", None).unwrap();
    assert_eq!(records, vec![record(&["a", "b,c"]), record(&["d\te"])]);
}

#[test]
fn custom_quotes() {
    let records = from_comma_separated_str("`a,b`,'c'", Some(&['`'])).unwrap();
    assert_eq!(records, vec![record(&["a,b", "'c'"])]);
}

#[test]
fn empty_input() {
    assert_eq!(from_comma_separated_str("", None).unwrap(), vec![record(&[""])]);
}

#[test]
fn separator_as_quote() {
    let err = from_tab_separated_str("a\tb", Some(&['\t'])).unwrap_err();
    assert!(matches!(err, Error::SeparatorIsQuote('\t')));
    assert_eq!(err.to_string(), "separator '\\t' is also a quote character");
}
