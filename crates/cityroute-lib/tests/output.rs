mod common;

use cityroute_lib::{
    plan_route, EcoRequest, IndependentRequest, RestrictedRequest, RouteReport, RouteRequest,
};

fn report(request: RouteRequest) -> RouteReport {
    let graph = common::city();
    plan_route(&graph, &request).expect("planned")
}

#[test]
fn independent_text() {
    let report = report(RouteRequest::Independent(IndependentRequest::new(1, 3)));
    assert!(report.is_success());
    assert_eq!(
        report.render_text(),
        "Source:1\nDestination:3\nBestDrivingRoute:1,2,5,3(11)\nAlternativeDrivingRoute:1,4,3(12)\n"
    );
}

#[test]
fn independent_without_alternative_text() {
    let request = IndependentRequest::new(1, 3).without_alternative();
    let text = report(RouteRequest::Independent(request)).render_text();
    assert!(text.ends_with("AlternativeDrivingRoute:No Alternative Path Found\n"));
}

#[test]
fn unreachable_text() {
    let report = report(RouteRequest::Independent(IndependentRequest::new(1, 6)));
    assert!(!report.is_success());
    assert_eq!(report.render_text(), "Source:1\nDestination:6\nNo Path Found\n");
}

#[test]
fn restricted_text() {
    let request = RestrictedRequest::new(1, 3).avoid_nodes([2]);
    let text = report(RouteRequest::Restricted(request)).render_text();
    assert_eq!(
        text,
        "Source:1\nDestination:3\nRestrictedDrivingRoute:1,4,3(12)\n"
    );

    let request = RestrictedRequest::new(1, 3).include(6);
    let text = report(RouteRequest::Restricted(request)).render_text();
    assert!(text.ends_with("RestrictedDrivingRoute:No Path Found\n"));
}

#[test]
fn eco_failure_text() {
    let text = report(RouteRequest::Eco(EcoRequest::new(1, 3, 5.0))).render_text();
    assert_eq!(
        text,
        "Source:1\nDestination:3\nDrivingRoute:none\nParkingNode:none\nWalkingRoute:none\nTotalTime:\nMessage:No possible route with max. walking time of 5 minutes.\n"
    );
}

#[test]
fn rejected_include_text() {
    let request = RestrictedRequest::new(1, 3).include(99);
    let text = report(RouteRequest::Restricted(request)).render_text();
    assert_eq!(text, "Source:1\nDestination:3\nInclude ID is invalid!\n");
}

#[test]
fn json_is_tagged_by_kind() {
    let report = report(RouteRequest::Eco(EcoRequest::new(1, 3, 10.0)));
    let json = report.to_json().expect("serialises");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["kind"], "eco");
    assert_eq!(value["legs"]["parking"], 2);
    assert_eq!(value["legs"]["driving"]["steps"], serde_json::json!([1, 2]));
    assert_eq!(value["legs"]["total_time"], 13.0);
    assert!(value["legs"]["driving"].get("edges").is_none());
}

#[test]
fn rejected_json_names_field() {
    let report = report(RouteRequest::Independent(IndependentRequest::new(1, 42)));
    let value: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("serialises")).expect("valid json");

    assert_eq!(value["kind"], "rejected");
    assert_eq!(value["field"], "destination");
    assert_eq!(value["id"], 42);
    assert_eq!(value["mode"], "independent");
}
