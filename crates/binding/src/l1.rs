//! L1 contract bindings.
//!
//! Includes the contracts deployed per L1 network:
//! - Lib_AddressManager (name → address registry for the system)
//! - L1CrossDomainMessenger
//! - L1StandardBridge
//! - StateCommitmentChain / CanonicalTransactionChain
//! - BondManager

use alloy_sol_types::sol;

sol! {
    /// Batch header appended to the StateCommitmentChain
    #[derive(Debug)]
    struct ChainBatchHeader {
        uint256 batchIndex;
        bytes32 batchRoot;
        uint256 batchSize;
        uint256 prevTotalElements;
        bytes extraData;
    }

    /// Lib_AddressManager - resolves system contract names to addresses
    #[sol(rpc)]
    interface ILibAddressManager {
        event AddressSet(string indexed _name, address _newAddress, address _oldAddress);

        function getAddress(string memory _name) external view returns (address);

        function setAddress(string memory _name, address _address) external;

        function owner() external view returns (address);
    }

    /// L1CrossDomainMessenger - sends messages from L1 to L2
    #[sol(rpc)]
    interface IL1CrossDomainMessenger {
        event SentMessage(
            address indexed target,
            address sender,
            bytes message,
            uint256 messageNonce,
            uint256 gasLimit
        );

        event RelayedMessage(bytes32 indexed msgHash);

        event FailedRelayedMessage(bytes32 indexed msgHash);

        function sendMessage(address _target, bytes memory _message, uint32 _gasLimit) external;

        function xDomainMessageSender() external view returns (address);

        function successfulMessages(bytes32 msgHash) external view returns (bool);

        function libAddressManager() external view returns (address);
    }

    /// L1StandardBridge - L1 side of the standard ERC20/ETH bridge
    #[sol(rpc)]
    interface IL1StandardBridge {
        event ETHDepositInitiated(
            address indexed _from,
            address indexed _to,
            uint256 _amount,
            bytes _data
        );

        event ERC20DepositInitiated(
            address indexed _l1Token,
            address indexed _l2Token,
            address indexed _from,
            address _to,
            uint256 _amount,
            bytes _data
        );

        event ETHWithdrawalFinalized(
            address indexed _from,
            address indexed _to,
            uint256 _amount,
            bytes _data
        );

        function depositETH(uint32 _l2Gas, bytes calldata _data) external payable;

        function depositETHTo(address _to, uint32 _l2Gas, bytes calldata _data) external payable;

        function depositERC20(
            address _l1Token,
            address _l2Token,
            uint256 _amount,
            uint32 _l2Gas,
            bytes calldata _data
        ) external;

        function depositERC20To(
            address _l1Token,
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _l2Gas,
            bytes calldata _data
        ) external;

        /// Amount of `_l1Token` locked in the bridge for `_l2Token`
        function deposits(address _l1Token, address _l2Token) external view returns (uint256);

        function l2TokenBridge() external view returns (address);

        function messenger() external view returns (address);
    }

    /// StateCommitmentChain - L2 state roots committed to L1
    #[sol(rpc)]
    interface IStateCommitmentChain {
        event StateBatchAppended(
            uint256 indexed _batchIndex,
            bytes32 _batchRoot,
            uint256 _batchSize,
            uint256 _prevTotalElements,
            bytes _extraData
        );

        function getTotalElements() external view returns (uint256);

        function getTotalBatches() external view returns (uint256);

        function getLastSequencerTimestamp() external view returns (uint256);

        function FRAUD_PROOF_WINDOW() external view returns (uint256);

        function insideFraudProofWindow(ChainBatchHeader memory _batchHeader) external view returns (bool);
    }

    /// CanonicalTransactionChain - ordered L2 transaction batches and the L1→L2 queue
    #[sol(rpc)]
    interface ICanonicalTransactionChain {
        event TransactionEnqueued(
            address indexed _l1TxOrigin,
            address indexed _target,
            uint256 _gasLimit,
            bytes _data,
            uint256 indexed _queueIndex,
            uint256 _timestamp
        );

        function enqueue(address _target, uint256 _gasLimit, bytes memory _data) external;

        function getTotalElements() external view returns (uint256);

        function getTotalBatches() external view returns (uint256);

        function getNextQueueIndex() external view returns (uint40);

        function getQueueLength() external view returns (uint40);
    }

    /// BondManager - proposer collateral
    #[sol(rpc)]
    interface IBondManager {
        function isCollateralized(address _who) external view returns (bool);
    }
}
