use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub holder: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct WithdrawEvent {
    pub holder: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct PlaceOrderEvent {
    pub order_sn: u64,
    pub lender: Pubkey,
    pub balance: u64,
    pub rate: u16,
}

#[event]
pub struct CancelOrderEvent {
    pub order_sn: u64,
    pub lender: Pubkey,
    pub balance: u64,
}

#[event]
pub struct BorrowEvent {
    pub receipt_sn: u64,
    pub order_sn: u64,
    pub borrower: Pubkey,
    pub lender: Pubkey,
    pub amount: u64,
    pub time: u64,
    pub rate: u16,
    pub order_balance: u64,
}

#[event]
pub struct RepayEvent {
    pub receipt_sn: u64,
    pub borrower: Pubkey,
    pub lender: Pubkey,
    pub principal: u64,
    pub amount: u64,
}
