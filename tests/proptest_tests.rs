use proptest::prelude::*;

use hotel_search::adapters::http::response::decode_search_response;
use hotel_search::domain::hotel::{Diagnostics, Hotel, SearchResult, SupplierLabel, supplier_label};
use hotel_search::domain::request_state::RequestState;
use hotel_search::domain::search_query::SearchForm;
use hotel_search::error::HotelSearchError;
use hotel_search::ui::renderer::{RenderOptions, render};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("success".to_string()),
        Just("failure".to_string()),
        "[a-z]{0,10}",
    ]
}

fn arb_hotel() -> impl Strategy<Value = Hotel> {
    ("[a-z0-9]{1,8}", "[A-Za-z ]{1,20}", 0.0..100_000.0_f64, "[A-Za-z]{1,12}").prop_map(
        |(hotel_id, name, price, city)| Hotel {
            hotel_id,
            name,
            price,
            city,
        },
    )
}

fn arb_state() -> impl Strategy<Value = RequestState> {
    let result = (
        prop::collection::vec(arb_hotel(), 0..10),
        prop::option::of((arb_status(), arb_status())),
    )
        .prop_map(|(hotels, diagnostics)| SearchResult {
            hotels,
            diagnostics: diagnostics.map(|(supplier_a, supplier_b)| Diagnostics {
                supplier_a,
                supplier_b,
            }),
        });
    prop_oneof![
        Just(RequestState::Idle),
        Just(RequestState::Loading),
        ".{0,40}".prop_map(RequestState::Error),
        result.prop_map(RequestState::Success),
    ]
}

fn arb_form() -> impl Strategy<Value = SearchForm> {
    (".{0,20}", ".{0,12}", ".{0,12}").prop_map(|(city, check_in, check_out)| SearchForm {
        city,
        check_in,
        check_out,
    })
}

// ---------------------------------------------------------------------------
// Supplier label
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn label_is_symmetric(a in arb_status(), b in arb_status()) {
        let forward = supplier_label(&a, &b);
        let mirrored = match supplier_label(&b, &a) {
            SupplierLabel::SupplierA => SupplierLabel::SupplierB,
            SupplierLabel::SupplierB => SupplierLabel::SupplierA,
            SupplierLabel::BestOfBoth => SupplierLabel::BestOfBoth,
        };
        prop_assert_eq!(forward, mirrored);
    }

    #[test]
    fn single_supplier_label_requires_exactly_one_success(a in arb_status(), b in arb_status()) {
        let a_ok = a == "success";
        let b_ok = b == "success";
        let expected = match (a_ok, b_ok) {
            (true, false) => SupplierLabel::SupplierA,
            (false, true) => SupplierLabel::SupplierB,
            _ => SupplierLabel::BestOfBoth,
        };
        prop_assert_eq!(supplier_label(&a, &b), expected);
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn render_is_idempotent(form in arb_form(), state in arb_state(), color in any::<bool>()) {
        let options = RenderOptions { currency_symbol: "₹".into(), color };
        prop_assert_eq!(render(&form, &state, &options), render(&form, &state, &options));
    }

    #[test]
    fn render_lists_every_hotel(hotels in prop::collection::vec(arb_hotel(), 1..10)) {
        let state = RequestState::Success(SearchResult { hotels: hotels.clone(), diagnostics: None });
        let text = render(&SearchForm::default(), &state, &RenderOptions::default());
        for (i, hotel) in hotels.iter().enumerate() {
            let prefix = format!("{}. {} — ", i + 1, hotel.name);
            prop_assert!(text.contains(&prefix));
        }
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decoder_never_panics(status in 100u16..600, body in ".{0,200}") {
        let _ = decode_search_response(status, &body);
    }

    #[test]
    fn non_success_status_is_http_error(status in 300u16..600, body in ".{0,100}") {
        let is_http_error = matches!(
            decode_search_response(status, &body),
            Err(HotelSearchError::Http { .. })
        );
        prop_assert!(is_http_error);
    }

    #[test]
    fn object_without_result_is_empty(status in 200u16..300, key in "[a-qs-z]{1,10}") {
        let body = format!(r#"{{"{key}": 1}}"#);
        let is_empty = matches!(
            decode_search_response(status, &body),
            Err(HotelSearchError::EmptyResult)
        );
        prop_assert!(is_empty);
    }

    #[test]
    fn valid_form_always_yields_query(city in "[A-Za-z]{1,20}", day in 1u32..28) {
        let form = SearchForm {
            city: city.clone(),
            check_in: format!("2024-06-{day:02}"),
            check_out: format!("2024-07-{day:02}"),
        };
        let query = form.to_query().unwrap();
        prop_assert_eq!(query.city, city);
    }
}
