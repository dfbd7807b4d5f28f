//! Template and order fixtures shared across the integration tests.

use hoadon::Template;
use serde_json::{Value, json};

/// A receipt-style invoice template exercising interpolation, helpers and
/// the loop construct, the way operator-authored templates do.
pub fn invoice_template() -> Template {
    Template {
        id: "tpl-invoice".to_string(),
        name: "Hóa đơn bán lẻ".to_string(),
        template_type: "invoice".to_string(),
        paper_size: "K80".to_string(),
        margin: None,
        content: "<h1>{{uppercase store.name}}</h1>\
                  <p>Khách hàng: {{customer.tenKhachHang}}</p>\
                  <table>\
                  {{#each items}}\
                  <tr><td>{{inc @index}}</td><td>{{tenHang}}</td>\
                  <td>{{soLuong}}</td><td>{{currency thanhTien}}</td></tr>\
                  {{/each}}\
                  </table>\
                  <p>Tổng cộng: {{currency totals.khachCanTra}}</p>\
                  <p>Ngày: {{datetime orderSummary.ngayTao}}</p>"
            .to_string(),
        description: Some("Mẫu in hóa đơn khổ K80".to_string()),
    }
}

pub fn shipping_template() -> Template {
    Template {
        id: "tpl-shipping".to_string(),
        name: "Phiếu giao hàng".to_string(),
        template_type: "shipping".to_string(),
        paper_size: "A5".to_string(),
        margin: None,
        content: "<p>Người nhận: {{shipping.nguoiNhan}} - {{shipping.soDienThoai}}</p>\
                  <p>Địa chỉ: {{shipping.diaChi}}</p>\
                  <p>Đơn vị vận chuyển: {{shipping.donViVanChuyen}}</p>"
            .to_string(),
        description: None,
    }
}

pub fn sample_order() -> Value {
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
        "khachDaTra": 690000
    })
}

/// The canonical context the sample order normalizes to.
pub fn sample_context() -> Value {
    hoadon::compose_print_context(&sample_order(), None, None)
}
