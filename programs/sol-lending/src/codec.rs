use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Discriminator};
use crate::errors::LendingError;
use crate::state::{Config, GlobalState, LoanReceipt, Order, UserBalance};

/// Fixed-width account layout: 8-byte discriminator followed by the
/// little-endian Borsh encoding of the record's fields.
pub trait AccountCodec: AccountSerialize + AccountDeserialize + Discriminator {
    /// Total encoded length, discriminator included
    const SIZE: usize;

    fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(Self::SIZE);
        self.try_serialize(&mut data)?;
        require!(data.len() == Self::SIZE, LendingError::MalformedAccount);
        Ok(data)
    }

    /// Reject anything that is not exactly `SIZE` bytes with a matching
    /// discriminator. Trailing bytes are never ignored.
    fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != Self::SIZE {
            msg!("Malformed account: {} bytes, expected {}", data.len(), Self::SIZE);
            return err!(LendingError::MalformedAccount);
        }
        Self::try_deserialize(&mut &data[..]).map_err(|_| error!(LendingError::MalformedAccount))
    }
}

impl AccountCodec for UserBalance {
    const SIZE: usize = UserBalance::LEN;
}

impl AccountCodec for GlobalState {
    const SIZE: usize = GlobalState::LEN;
}

impl AccountCodec for Config {
    const SIZE: usize = Config::LEN;
}

impl AccountCodec for Order {
    const SIZE: usize = Order::LEN;
}

impl AccountCodec for LoanReceipt {
    const SIZE: usize = LoanReceipt::LEN;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_RATE_BPS;
    use anchor_lang::error::Error;

    fn sample_order(rate: u16) -> Order {
        Order {
            sn: 42,
            lender: Pubkey::new_unique(),
            balance: 5_000_000_000,
            rate,
        }
    }

    fn sample_receipt(rate: u16) -> LoanReceipt {
        LoanReceipt {
            sn: 7,
            borrower: Pubkey::new_unique(),
            lender: Pubkey::new_unique(),
            amount: 2_000_000_000,
            time: 1_700_000_000,
            rate,
        }
    }

    #[test]
    fn layout_sizes() {
        assert_eq!(Order::SIZE, 58);
        assert_eq!(LoanReceipt::SIZE, 98);
        assert_eq!(UserBalance::SIZE, 48);
        assert_eq!(GlobalState::SIZE, 24);
        assert_eq!(Config::SIZE, 57);
    }

    #[test]
    fn order_field_offsets() {
        let order = sample_order(100);
        let data = order.encode().unwrap();

        assert_eq!(data.len(), 58);
        assert_eq!(&data[..8], &Order::discriminator());
        assert_eq!(&data[8..16], &42u64.to_le_bytes());
        assert_eq!(&data[16..48], order.lender.as_ref());
        assert_eq!(&data[48..56], &5_000_000_000u64.to_le_bytes());
        assert_eq!(&data[56..58], &100u16.to_le_bytes());
    }

    #[test]
    fn receipt_field_offsets() {
        let receipt = sample_receipt(100);
        let data = receipt.encode().unwrap();

        assert_eq!(data.len(), 98);
        assert_eq!(&data[16..48], receipt.borrower.as_ref());
        assert_eq!(&data[48..80], receipt.lender.as_ref());
        assert_eq!(&data[80..88], &2_000_000_000u64.to_le_bytes());
        assert_eq!(&data[88..96], &1_700_000_000u64.to_le_bytes());
        assert_eq!(&data[96..98], &100u16.to_le_bytes());
    }

    fn edge_keys() -> [Pubkey; 3] {
        [Pubkey::default(), Pubkey::new_from_array([0xff; 32]), Pubkey::new_unique()]
    }

    #[test]
    fn order_edge_values_survive_decode() {
        for key in edge_keys() {
            for value in [0, 1, u64::MAX] {
                for rate in [0, DEFAULT_RATE_BPS, u16::MAX] {
                    let order = Order {
                        sn: value,
                        lender: key,
                        balance: value,
                        rate,
                    };
                    assert_eq!(Order::decode(&order.encode().unwrap()).unwrap(), order);
                }
            }
        }
    }

    #[test]
    fn receipt_edge_values_survive_decode() {
        for borrower in edge_keys() {
            for lender in edge_keys() {
                for value in [0, 1, u64::MAX] {
                    for rate in [0, u16::MAX] {
                        let receipt = LoanReceipt {
                            sn: value,
                            borrower,
                            lender,
                            amount: u64::MAX - value,
                            time: value,
                            rate,
                        };
                        let decoded = LoanReceipt::decode(&receipt.encode().unwrap()).unwrap();
                        assert_eq!(decoded, receipt);
                    }
                }
            }
        }
    }

    #[test]
    fn wrong_length_is_malformed() {
        let mut data = sample_order(100).encode().unwrap();
        data.push(0);
        assert_eq!(Order::decode(&data).unwrap_err(), Error::from(LendingError::MalformedAccount));

        data.truncate(57);
        assert_eq!(Order::decode(&data).unwrap_err(), Error::from(LendingError::MalformedAccount));

        assert_eq!(Order::decode(&[]).unwrap_err(), Error::from(LendingError::MalformedAccount));
    }

    #[test]
    fn receipt_wrong_length_is_malformed() {
        let mut data = sample_receipt(100).encode().unwrap();
        data.truncate(97);
        assert_eq!(
            LoanReceipt::decode(&data).unwrap_err(),
            Error::from(LendingError::MalformedAccount)
        );

        data.extend_from_slice(&[0, 0]);
        assert_eq!(
            LoanReceipt::decode(&data).unwrap_err(),
            Error::from(LendingError::MalformedAccount)
        );
    }

    #[test]
    fn wrong_kind_is_malformed() {
        let order = sample_order(100).encode().unwrap();
        assert_eq!(
            LoanReceipt::decode(&order).unwrap_err(),
            Error::from(LendingError::MalformedAccount)
        );

        // Same length, different discriminator
        let mut padded = order.clone();
        padded.resize(LoanReceipt::SIZE, 0);
        assert_eq!(
            LoanReceipt::decode(&padded).unwrap_err(),
            Error::from(LendingError::MalformedAccount)
        );

        let receipt = sample_receipt(100).encode().unwrap();
        assert_eq!(Order::decode(&receipt[..Order::SIZE]).unwrap_err(), Error::from(LendingError::MalformedAccount));
    }

    #[test]
    fn wrong_discriminator_is_malformed() {
        let mut data = sample_order(100).encode().unwrap();
        data[0] ^= 0xff;
        assert_eq!(Order::decode(&data).unwrap_err(), Error::from(LendingError::MalformedAccount));
    }
}
