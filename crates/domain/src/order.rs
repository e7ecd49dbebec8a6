use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::OrderPayload;

/// An order in the shape handed to storage. Fields stay optional here so
/// that absent payload fields propagate untouched; the storage layer's
/// NOT NULL columns are what reject an incomplete document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    pub order_id: Option<String>,
    pub value: Option<f64>,
    pub creation_date: Option<DateTime<Utc>>,
    pub items: Option<Vec<ItemDocument>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDocument {
    pub product_id: Option<i64>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

/// Pure structural transform from the external payload to the storage
/// shape: `numeroPedido` becomes `orderId`, `valorTotal` becomes `value`,
/// `dataCriacao` becomes `creationDate`, and each item's `idItem`,
/// `quantidadeItem` and `valorItem` become `productId`, `quantity` and
/// `price`. No validation, no side effects.
pub fn map_order(payload: &OrderPayload) -> OrderDocument {
    OrderDocument {
        order_id: payload.numero_pedido.clone(),
        value: payload.valor_total,
        creation_date: payload.data_criacao,
        items: payload.items.as_ref().map(|items| {
            items
                .iter()
                .map(|item| ItemDocument {
                    product_id: item.id_item,
                    quantity: item.quantidade_item,
                    price: item.valor_item,
                })
                .collect()
        }),
    }
}
