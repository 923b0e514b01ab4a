use yew::prelude::*;

use crate::config;
use crate::models::PersonRecord;

pub const COLUMNS: [&str; 6] = ["image", "entity_id", "name", "forename", "nationalities", "date_of_birth"];

const HEADINGS: [&str; 6] = ["Image", "Entity ID", "Name", "Forename", "Nationalities", "Date of Birth"];

const IMAGE_STYLE: &str = "width: 100px; height: 100px; object-fit: cover;";

#[derive(Clone, PartialEq, Debug)]
pub enum TableCell {
    Image { src: String, alt: String },
    Text(String),
}

#[derive(Clone, PartialEq, Debug)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// One row per record, cells in `COLUMNS` order.
pub fn render_rows(records: &[PersonRecord]) -> Vec<TableRow> {
    records.iter().map(render_row).collect()
}

fn render_row(person: &PersonRecord) -> TableRow {
    let cells = COLUMNS
        .iter()
        .map(|column| match *column {
            "image" => TableCell::Image {
                src: config::image_url(&person.entity_id),
                alt: format!("Image for {}", person.name.as_deref().unwrap_or_default()),
            },
            "entity_id" => TableCell::Text(person.entity_id.clone()),
            "name" => TableCell::Text(person.name.clone().unwrap_or_default()),
            "forename" => TableCell::Text(person.forename.clone().unwrap_or_default()),
            "nationalities" => TableCell::Text(person.nationalities_text()),
            _ => TableCell::Text(person.date_of_birth.clone().unwrap_or_default()),
        })
        .collect();
    TableRow { cells }
}

#[derive(Properties, PartialEq)]
pub struct ResultsTableProps {
    pub records: Vec<PersonRecord>,
    #[prop_or_default]
    pub body_id: Option<AttrValue>,
}

#[function_component]
pub fn ResultsTable(props: &ResultsTableProps) -> Html {
    let rows = render_rows(&props.records);

    html! {
        <table class="results-table">
            <thead>
                <tr>
                    { for HEADINGS.iter().map(|heading| html! { <th>{heading}</th> }) }
                </tr>
            </thead>
            <tbody id={props.body_id.clone()}>
                {
                    rows.into_iter().map(|row| {
                        html! {
                            <tr>
                                {
                                    row.cells.into_iter().map(|cell| match cell {
                                        TableCell::Image { src, alt } => html! {
                                            <td><img src={src} alt={alt} style={IMAGE_STYLE} /></td>
                                        },
                                        TableCell::Text(text) => html! { <td>{text}</td> },
                                    }).collect::<Html>()
                                }
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
