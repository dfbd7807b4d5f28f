//! Normalizes raw business records into the canonical print context.
//!
//! Orders and shipments arrive as loosely-typed JSON mappings straight
//! from their owning collaborators; their field inventory is the Vietnamese
//! retail vocabulary of the wire format (`tenKhachHang`, `sanPham`,
//! `khachCanTra`, ...). [`compose_print_context`] folds them into the one
//! shape every stored template is written against:
//! `{store, customer, shipping, items, orderSummary, totals}`.
//!
//! This is a pure transformation with no side effects; it exists so the
//! renderer sees a consistent context regardless of which workflow
//! triggered printing.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The issuing store's letterhead data.
///
/// Read from a settings collaborator; the [`Default`] values are the fixed
/// fallback used when no profile has been configured yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub tax_code: String,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: "Cửa hàng của tôi".to_string(),
            address: "Chưa cập nhật địa chỉ".to_string(),
            phone: "".to_string(),
            tax_code: "".to_string(),
        }
    }
}

/// Builds the canonical root context for one order.
///
/// `shipment` may be omitted entirely; recipient name, phone, address,
/// carrier and fee then fall back to the order's own fields, so an invoice
/// printed before any shipment exists still shows sane values.
pub fn compose_print_context(
    order: &Value,
    shipment: Option<&Value>,
    profile: Option<&StoreProfile>,
) -> Value {
    let fallback = StoreProfile::default();
    let store = profile.unwrap_or(&fallback);

    let items = order.get("sanPham").cloned().unwrap_or_else(|| json!([]));
    let item_count = sum_quantities(&items);

    let khach_can_tra = number_field(order, "khachCanTra");
    let khach_da_tra = number_field(order, "khachDaTra");
    let con_phai_thu = match order.get("conPhaiThu").and_then(Value::as_f64) {
        Some(explicit) => explicit,
        None => (khach_can_tra - khach_da_tra).max(0.0),
    };

    json!({
        "store": store,
        "customer": {
            "maKhachHang": text_field(order, "maKhachHang"),
            "tenKhachHang": text_field(order, "tenKhachHang"),
            "email": text_field(order, "email"),
            "soDienThoai": text_field(order, "soDienThoai"),
            "diaChi": text_field(order, "diaChi"),
            "nhomKhachHang": non_empty_or(text_field(order, "nhomKhachHang"), "Khách lẻ"),
        },
        "shipping": {
            "nguoiNhan": merged_text(shipment, order, "nguoiNhan", "tenKhachHang"),
            "soDienThoai": merged_text(shipment, order, "soDienThoai", "soDienThoai"),
            "diaChi": merged_text(shipment, order, "diaChi", "diaChi"),
            "donViVanChuyen": merged_text(shipment, order, "donViVanChuyen", "donViVanChuyen"),
            "phiVanChuyen": merged_number(shipment, order, "phiVanChuyen"),
        },
        "items": items,
        "orderSummary": {
            "tongSoLuong": json_number(item_count),
            "kenhBan": text_field(order, "kenhBan"),
            "ngayTao": text_field(order, "ngayTao"),
        },
        "totals": {
            "tamTinh": json_number(number_field(order, "tamTinh")),
            "giamGia": json_number(number_field(order, "giamGia")),
            "khachCanTra": json_number(khach_can_tra),
            "khachDaTra": json_number(khach_da_tra),
            "conPhaiThu": json_number(con_phai_thu),
        },
    })
}

// --- Field extraction ---

fn text_field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn number_field(record: &Value, key: &str) -> f64 {
    match record.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() { fallback.to_string() } else { value }
}

/// A shipment field with an order-derived fallback.
fn merged_text(shipment: Option<&Value>, order: &Value, key: &str, order_key: &str) -> String {
    let from_shipment = shipment.map(|s| text_field(s, key)).unwrap_or_default();
    non_empty_or(from_shipment, &text_field(order, order_key))
}

fn merged_number(shipment: Option<&Value>, order: &Value, key: &str) -> Value {
    let explicit = shipment.and_then(|s| s.get(key)).and_then(Value::as_f64);
    json_number(explicit.unwrap_or_else(|| number_field(order, key)))
}

fn sum_quantities(items: &Value) -> f64 {
    match items {
        Value::Array(items) => items.iter().map(|item| number_field(item, "soLuong")).sum(),
        _ => 0.0,
    }
}

/// Whole amounts stay integral so templates print `3`, not `3.0`.
fn json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 9e15 {
        json!(n as i64)
    } else {
        json!(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Value {
        json!({
            "maKhachHang": "KH-007",
            "tenKhachHang": "Nguyễn Văn An",
            "soDienThoai": "0901234567",
            "diaChi": "12 Lê Lợi, Quận 1",
            "kenhBan": "Bán trực tiếp",
            "ngayTao": "2024-01-15T10:30:00Z",
            "sanPham": [
                { "tenHang": "Áo thun", "maHang": "SP-01", "soLuong": 2, "donGia": 120000, "giamGia": 0, "thanhTien": 240000 },
                { "tenHang": "Quần jean", "maHang": "SP-02", "soLuong": 1, "donGia": 450000, "giamGia": 0, "thanhTien": 450000 }
            ],
            "tamTinh": 690000,
            "giamGia": 0,
            "khachCanTra": 690000,
            "khachDaTra": 200000
        })
    }

    #[test]
    fn test_canonical_shape() {
        let context = compose_print_context(&sample_order(), None, None);
        for section in ["store", "customer", "shipping", "items", "orderSummary", "totals"] {
            assert!(context.get(section).is_some(), "missing section {section}");
        }
    }

    #[test]
    fn test_store_fallback_profile() {
        let context = compose_print_context(&sample_order(), None, None);
        assert_eq!(context["store"]["name"], "Cửa hàng của tôi");

        let profile = StoreProfile {
            name: "Tạp hóa Minh".to_string(),
            address: "5 Trần Phú".to_string(),
            phone: "0281234567".to_string(),
            tax_code: "0312345678".to_string(),
        };
        let context = compose_print_context(&sample_order(), None, Some(&profile));
        assert_eq!(context["store"]["name"], "Tạp hóa Minh");
        assert_eq!(context["store"]["taxCode"], "0312345678");
    }

    #[test]
    fn test_customer_group_defaults() {
        let context = compose_print_context(&sample_order(), None, None);
        assert_eq!(context["customer"]["nhomKhachHang"], "Khách lẻ");
        assert_eq!(context["customer"]["tenKhachHang"], "Nguyễn Văn An");
    }

    #[test]
    fn test_shipping_falls_back_to_order_fields() {
        let context = compose_print_context(&sample_order(), None, None);
        assert_eq!(context["shipping"]["nguoiNhan"], "Nguyễn Văn An");
        assert_eq!(context["shipping"]["soDienThoai"], "0901234567");
        assert_eq!(context["shipping"]["diaChi"], "12 Lê Lợi, Quận 1");
    }

    #[test]
    fn test_explicit_shipment_wins() {
        let shipment = json!({
            "nguoiNhan": "Trần Thị Bình",
            "diaChi": "89 Nguyễn Huệ",
            "donViVanChuyen": "GHN",
            "phiVanChuyen": 30000
        });
        let context = compose_print_context(&sample_order(), Some(&shipment), None);
        assert_eq!(context["shipping"]["nguoiNhan"], "Trần Thị Bình");
        assert_eq!(context["shipping"]["donViVanChuyen"], "GHN");
        assert_eq!(context["shipping"]["phiVanChuyen"], 30000);
        // Phone was not on the shipment; the order's number fills in.
        assert_eq!(context["shipping"]["soDienThoai"], "0901234567");
    }

    #[test]
    fn test_items_pass_through_verbatim() {
        let context = compose_print_context(&sample_order(), None, None);
        assert_eq!(context["items"][0]["tenHang"], "Áo thun");
        assert_eq!(context["items"][1]["thanhTien"], 450000);
    }

    #[test]
    fn test_order_summary_sums_quantities() {
        let context = compose_print_context(&sample_order(), None, None);
        assert_eq!(context["orderSummary"]["tongSoLuong"], 3);
        assert_eq!(context["orderSummary"]["kenhBan"], "Bán trực tiếp");
    }

    #[test]
    fn test_still_to_collect_is_derived_and_clamped() {
        let context = compose_print_context(&sample_order(), None, None);
        assert_eq!(context["totals"]["conPhaiThu"], 490000);

        let mut overpaid = sample_order();
        overpaid["khachDaTra"] = json!(900000);
        let context = compose_print_context(&overpaid, None, None);
        assert_eq!(context["totals"]["conPhaiThu"], 0);

        let mut explicit = sample_order();
        explicit["conPhaiThu"] = json!(123);
        let context = compose_print_context(&explicit, None, None);
        assert_eq!(context["totals"]["conPhaiThu"], 123);
    }

    #[test]
    fn test_empty_order_degrades_to_defaults() {
        let context = compose_print_context(&json!({}), None, None);
        assert_eq!(context["items"], json!([]));
        assert_eq!(context["totals"]["khachCanTra"], 0);
        assert_eq!(context["orderSummary"]["tongSoLuong"], 0);
        assert_eq!(context["customer"]["nhomKhachHang"], "Khách lẻ");
    }
}
