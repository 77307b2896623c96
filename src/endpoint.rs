//! Endpoint table.
//!
//! Every remote operation is a fixed path relative to the environment base
//! URL. Paths live here, one constant per operation, so each can be checked
//! against the platform documentation on its own.

/// A remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    /// Whether the call sends the caller's token header.
    pub requires_token: bool,
}

const fn authed(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        path,
        requires_token: true,
    }
}

// ── Auth ─────────────────────────────────────────────────────────────────────

pub const GET_TOKEN: Endpoint = Endpoint {
    name: "get_token",
    path: "/login/getToken",
    requires_token: false,
};

// ── Platform ─────────────────────────────────────────────────────────────────

pub const GET_CITY_LIST: Endpoint = authed("get_city_list", "/platform/queryCityList");
pub const GET_VALUATION: Endpoint = authed("get_valuation", "/platform/queryProductList");

// ── Orders ───────────────────────────────────────────────────────────────────

pub const CREATE_ORDER: Endpoint = authed("create_order", "/platform/createOrder");
pub const GET_ORDER: Endpoint = authed("get_order", "/platform/queryOrderDetail");
pub const CANCEL_ORDER: Endpoint = authed("cancel_order", "/platform/cancelOrder");
pub const SET_CANCEL_REASON: Endpoint = authed("set_cancel_reason", "/platform/cancelReason");
pub const GET_ORDER_LIST: Endpoint = authed("get_order_list", "/platform/queryOrderList");
pub const GET_DRIVER_LOCATION: Endpoint =
    authed("get_driver_location", "/platform/queryDriverLocation");
pub const SAVE_ORDER_SCORE: Endpoint = authed("save_order_score", "/platform/orderScore");

// ── Complaints ───────────────────────────────────────────────────────────────

pub const GET_COMPLAIN_REASONS: Endpoint = authed("get_complain_reasons", "/complaint/reason");
pub const COMPLAIN: Endpoint = authed("complain", "/platform/complain");

// ── Employees ────────────────────────────────────────────────────────────────

pub const ADD_EMPLOYEE: Endpoint = authed("add_employee", "/common/addCompanyMembers");
pub const REMOVE_EMPLOYEE: Endpoint = authed("remove_employee", "/common/removeCompanyMembers");
pub const UPDATE_EMPLOYEE: Endpoint = authed("update_employee", "/common/modifyCompanyMembers");
pub const ADD_EMPLOYEES: Endpoint = authed("add_employees", "/common/addListCompanyMembers");

// ── Business travel ──────────────────────────────────────────────────────────

pub const ADD_BUSINESS_TRAVEL_FORM: Endpoint =
    authed("add_business_travel_form", "/common/businessTravelForm");

/// Every endpoint the SDK knows about.
pub const ALL: &[Endpoint] = &[
    GET_TOKEN,
    GET_CITY_LIST,
    GET_VALUATION,
    CREATE_ORDER,
    GET_ORDER,
    CANCEL_ORDER,
    SET_CANCEL_REASON,
    GET_ORDER_LIST,
    GET_DRIVER_LOCATION,
    SAVE_ORDER_SCORE,
    GET_COMPLAIN_REASONS,
    COMPLAIN,
    ADD_EMPLOYEE,
    REMOVE_EMPLOYEE,
    UPDATE_EMPLOYEE,
    ADD_EMPLOYEES,
    ADD_BUSINESS_TRAVEL_FORM,
];

/// Look up an endpoint by name.
pub fn by_name(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|e| e.name == name)
}
