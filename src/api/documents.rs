//! Fixed GraphQL documents sent by [`BuycoinsClient`](super::BuycoinsClient).
//!
//! Each [`Document`] pairs the query text with the root field its response
//! is read from. Variables are bound per call; nothing is interpolated.

/// A GraphQL query or mutation and the root field of its `data` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub root: &'static str,
    pub query: &'static str,
}

pub const GET_PAIRS: Document = Document {
    root: "getPairs",
    query: r#"query {
  getPairs
}"#,
};

pub const GET_PRO_ORDERS: Document = Document {
    root: "getProOrders",
    query: r#"query ($pair_: Pair!, $status_: ProOrderStatus!, $side_: OrderSide!) {
  getProOrders(pair: $pair_, status: $status_, side: $side_) {
    edges {
      node {
        id
        pair
        price
        side
        status
        timeInForce
        orderType
        fees
        filled
        total
        initialBaseQuantity
        initialQuoteQuantity
        remainingBaseQuantity
        remainingQuoteQuantity
        meanExecutionPrice
        engineMessage
      }
    }
  }
}"#,
};

pub const CANCEL_ORDER: Document = Document {
    root: "cancelOrder",
    query: r#"mutation ($id: ID!) {
  cancelOrder(proOrder: $id) {
    id
    pair
    price
    side
    status
    timeInForce
    orderType
    fees
    filled
    total
    initialBaseQuantity
    initialQuoteQuantity
    remainingBaseQuantity
    remainingQuoteQuantity
    meanExecutionPrice
    engineMessage
  }
}"#,
};

pub const GET_PRO_ORDER_FEES: Document = Document {
    root: "getProOrderFees",
    query: r#"query (
  $orderType_: OrderMatchingEngineOrder!
  $pair_: Pair!
  $side_: OrderSide!
  $amount_: BigDecimal!
) {
  getProOrderFees(orderType: $orderType_, pair: $pair_, side: $side_, amount: $amount_) {
    fee
    baseCurrencyTotal
    quoteCurrencyTotal
    price
  }
}"#,
};

pub const POST_PRO_MARKET_ORDER: Document = Document {
    root: "postProMarketOrder",
    query: r#"mutation ($pair_: Pair!, $quantity_: BigDecimal!, $side_: OrderSide!) {
  postProMarketOrder(pair: $pair_, quantity: $quantity_, side: $side_) {
    id
    pair
    price
    side
    status
    timeInForce
    orderType
    fees
    filled
    total
    initialBaseQuantity
    initialQuoteQuantity
    remainingBaseQuantity
    remainingQuoteQuantity
    meanExecutionPrice
    engineMessage
  }
}"#,
};

pub const POST_PRO_LIMIT_ORDER: Document = Document {
    root: "postProLimitOrder",
    query: r#"mutation (
  $pair_: Pair!
  $quantity_: BigDecimal!
  $price_: BigDecimal!
  $side_: OrderSide!
  $timeInForce_: TimeInForce!
) {
  postProLimitOrder(
    pair: $pair_
    quantity: $quantity_
    price: $price_
    side: $side_
    timeInForce: $timeInForce_
  ) {
    id
    pair
    price
    side
    status
    timeInForce
    orderType
    fees
    filled
    total
    initialBaseQuantity
    initialQuoteQuantity
    remainingBaseQuantity
    remainingQuoteQuantity
    meanExecutionPrice
    engineMessage
  }
}"#,
};

pub const CREATE_DEPOSIT_LINK: Document = Document {
    root: "createSendCashPayDeposit",
    query: r#"mutation ($amount: BigDecimal!) {
  createSendCashPayDeposit(amount: $amount) {
    amount
    createdAt
    fee
    id
    link
    reference
    status
    totalAmount
    type
  }
}"#,
};

pub const GET_BALANCES: Document = Document {
    root: "getBalances",
    query: r#"query ($crypto: Cryptocurrency) {
  getBalances(cryptocurrency: $crypto) {
    id
    cryptocurrency
    confirmedBalance
  }
}"#,
};

pub const SEND_ON_CHAIN: Document = Document {
    root: "send",
    query: r#"mutation ($cryptocurrency: Cryptocurrency!, $amount: BigDecimal!, $address: String!) {
  send(cryptocurrency: $cryptocurrency, amount: $amount, address: $address) {
    id
    address
    amount
    cryptocurrency
    fee
    status
    transaction {
      hash
      id
    }
  }
}"#,
};
